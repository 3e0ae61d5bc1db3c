use std::path::Path;

use idefc::{GenerationCache, MemoryLoader};

/// A small shader-language corpus touching every declaration kind.
pub const CORE: &str = r#"
// Enumerations
enum access { read write read_write }
enum address_space { @internal handle function private workgroup storage }
enum texel_format { rgba8unorm r32float }

// Types
@precedence(5) type f32
@precedence(4) type i32
@precedence(3) type u32
type bool
@display("vec{N}<{T}>") type vec<N: num, T>
type ptr<S: address_space, T, A: access>

// Matchers
match scalar: f32 | i32 | u32 | bool
match fiu32: f32 | i32 | u32
match fi32: f32 | i32
match readable: read | read_write
match function_private: function | private

// Builtins
fn abs[T: fiu32](T) -> T
fn abs[N: num, T: fiu32](vec<N, T>) -> vec<N, T>
@must_use fn select[T: scalar](f: T, t: T, cond: bool) -> T
@stage("fragment") fn dpdx(f32) -> f32
fn load[S: function_private, A: readable](p: ptr<S, f32, A>) -> f32

// Operators
@const op ! (bool) -> bool
@const op + [T: fiu32](T, T) -> T

// Constructors and converters
ctor i32() -> i32
conv f32[T: fi32](T) -> f32
"#;

pub fn cache_with(files: &[(&str, &str)]) -> GenerationCache<MemoryLoader> {
    let mut loader = MemoryLoader::new();
    for (path, text) in files {
        loader.insert(path, *text);
    }
    GenerationCache::new(loader)
}

pub fn core_cache() -> GenerationCache<MemoryLoader> {
    cache_with(&[("core.def", CORE)])
}

pub fn core() -> &'static Path {
    Path::new("core.def")
}

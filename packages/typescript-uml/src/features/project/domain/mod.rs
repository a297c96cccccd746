pub mod tsconfig;

pub use tsconfig::{AnchoredPatterns, CompilerOptions, Extends, TsConfig, TsConfigFile};

pub mod module;

pub use module::ModuleRecord;

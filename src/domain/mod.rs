pub mod error;

// Enterprise enhancement module
pub mod enterprise;

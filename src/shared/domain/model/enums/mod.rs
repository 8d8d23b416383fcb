pub mod validation_error;

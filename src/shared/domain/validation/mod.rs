pub mod identifier_validator;

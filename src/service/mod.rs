//! CrudService: generic CRUD and grid search over any `GridEntity`.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::validate_paging;

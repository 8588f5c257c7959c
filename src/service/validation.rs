//! Paging validation shared by every search variant.

use crate::error::AppError;

/// Reject paging values below 1 before they reach the query builder, where
/// they would produce a negative OFFSET. There is no upper bound on
/// `page_size`.
pub fn validate_paging(page: i64, page_size: i64) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    if page_size < 1 {
        return Err(AppError::BadRequest("pageSize must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sane_paging() {
        assert!(validate_paging(1, 1).is_ok());
        assert!(validate_paging(50, 1000).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        assert!(validate_paging(0, 10).is_err());
        assert!(validate_paging(-1, 10).is_err());
        assert!(validate_paging(1, 0).is_err());
        assert!(validate_paging(1, -5).is_err());
    }

    #[test]
    fn rejection_names_the_offending_field() {
        let err = validate_paging(0, 10).unwrap_err();
        assert!(err.to_string().contains("page"));
        let err = validate_paging(1, 0).unwrap_err();
        assert!(err.to_string().contains("pageSize"));
    }
}

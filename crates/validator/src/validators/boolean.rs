//! Boolean rules

use crate::foundation::ValidationError;

crate::validator! {
    /// The flag must be `true` (acceptance).
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("accepted", "must be accepted") }
    fn is_true();
}

//! Checked constructors for the statrs distributions used by the stages.

use statrs::distribution::{FisherSnedecor, StudentsT};

use crate::error::Error;

/// Standard t distribution with `df` degrees of freedom.
pub(crate) fn students_t(df: f64) -> Result<StudentsT, Error> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| {
        Error::invalid_input(format!("t distribution with df = {df} is undefined: {e}"))
    })
}

/// F distribution with (`df1`, `df2`) degrees of freedom.
pub(crate) fn fisher(df1: f64, df2: f64) -> Result<FisherSnedecor, Error> {
    FisherSnedecor::new(df1, df2).map_err(|e| {
        Error::invalid_input(format!(
            "F distribution with df = ({df1}, {df2}) is undefined: {e}"
        ))
    })
}

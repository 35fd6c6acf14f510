//! Pool creation form.

use super::{Checker, ValidationErrors};
use crate::types::NewPool;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolForm {
    pub name: String,
}

impl PoolForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<NewPool, ValidationErrors> {
        let mut check = Checker::default();
        check.min_len("name", &self.name, 2, "Title is req");
        check.finish()?;
        Ok(NewPool {
            name: self.name.clone(),
        })
    }

    pub fn reset(&mut self) {
        self.name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_name_is_rejected() {
        let err = PoolForm::new("a").validate().unwrap_err();
        assert_eq!(err.message("name"), Some("Title is req"));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn two_character_name_passes() {
        let pool = PoolForm::new("ab").validate().unwrap();
        assert_eq!(pool.name, "ab");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(PoolForm::new("é").validate().is_err());
        assert!(PoolForm::new("éé").validate().is_ok());
    }

    #[test]
    fn reset_clears_name() {
        let mut form = PoolForm::new("Lunch");
        form.reset();
        assert_eq!(form, PoolForm::default());
    }
}

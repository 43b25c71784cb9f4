//! Host mode toggle.
//!
//! This is a convenience switch that keeps casual players from editing the
//! question set. It is NOT access control: the code is compiled into the
//! binary and the flag is a plain value in a user-writable file, so anyone
//! with access to either can bypass it.

use crate::error::{QuizError, Result};
use crate::storage::{Storage, IS_HOST_KEY};

/// The shared host code.
pub const HOST_CODE: &str = "2580";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostGate {
    is_host: bool,
}

impl HostGate {
    /// Read the persisted flag. Anything other than `"true"` means locked.
    pub fn load(storage: &impl Storage) -> Result<Self> {
        let is_host = storage.get(IS_HOST_KEY)?.as_deref() == Some("true");
        Ok(Self { is_host })
    }

    pub fn is_host(&self) -> bool {
        self.is_host
    }

    /// Enter host mode if `input` matches [`HOST_CODE`]. On a mismatch the
    /// input is cleared and the state is left alone.
    pub fn unlock(&mut self, storage: &mut impl Storage, input: &mut String) -> Result<()> {
        if input.trim() != HOST_CODE {
            input.clear();
            tracing::info!("host unlock rejected");
            return Err(QuizError::WrongHostCode);
        }
        input.clear();
        storage.set(IS_HOST_KEY, "true")?;
        self.is_host = true;
        tracing::info!("host mode enabled");
        Ok(())
    }

    /// Leave host mode and forget the persisted flag.
    pub fn lock(&mut self, storage: &mut impl Storage) -> Result<()> {
        storage.remove(IS_HOST_KEY)?;
        self.is_host = false;
        tracing::info!("host mode disabled");
        Ok(())
    }

    /// `Ok(())` in host mode, [`QuizError::NotHost`] otherwise.
    pub fn require_host(&self) -> Result<()> {
        if self.is_host {
            Ok(())
        } else {
            Err(QuizError::NotHost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn unlock_persists_flag() {
        let mut storage = MemoryStorage::new();
        let mut gate = HostGate::load(&storage).unwrap();
        assert!(!gate.is_host());

        let mut input = HOST_CODE.to_string();
        gate.unlock(&mut storage, &mut input).unwrap();
        assert!(gate.is_host());
        assert_eq!(storage.get(IS_HOST_KEY).unwrap().as_deref(), Some("true"));
        assert!(HostGate::load(&storage).unwrap().is_host());
    }

    #[test]
    fn wrong_code_clears_input_and_keeps_state() {
        let mut storage = MemoryStorage::new();
        let mut gate = HostGate::default();
        let mut input = "0000".to_string();
        let err = gate.unlock(&mut storage, &mut input).unwrap_err();
        assert!(matches!(err, QuizError::WrongHostCode));
        assert!(input.is_empty());
        assert!(!gate.is_host());
        assert_eq!(storage.get(IS_HOST_KEY).unwrap(), None);
    }

    #[test]
    fn lock_removes_flag() {
        let mut storage = MemoryStorage::new();
        storage.set(IS_HOST_KEY, "true").unwrap();
        let mut gate = HostGate::load(&storage).unwrap();
        gate.lock(&mut storage).unwrap();
        assert!(!gate.is_host());
        assert!(gate.require_host().is_err());
        assert_eq!(storage.get(IS_HOST_KEY).unwrap(), None);
    }

    #[test]
    fn only_true_counts() {
        let mut storage = MemoryStorage::new();
        storage.set(IS_HOST_KEY, "yes").unwrap();
        assert!(!HostGate::load(&storage).unwrap().is_host());
    }
}

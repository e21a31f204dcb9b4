//! Attaching marks to faults.
//!
//! A fault holds at most one mark. Marking again replaces the previous mark
//! wholesale: no error, no merge.

use crate::domain::{Fault, LogEntryMark, MarkError, Severity};
use serde_json::Value;

/// Marks `fault`, replacing any existing mark.
///
/// Returns the same fault so calls can be chained.
pub fn attach<'a>(
    fault: Option<&'a mut Fault>,
    severity: impl Into<Severity>,
    data: impl Into<Value>,
) -> Result<&'a mut Fault, MarkError> {
    let fault = fault.ok_or(MarkError::MissingFault)?;
    fault.set_mark(LogEntryMark::new(severity.into(), data.into()));
    Ok(fault)
}

/// Like [`attach`], but a JSON `null` payload is rejected as well.
pub fn attach_strict<'a>(
    fault: Option<&'a mut Fault>,
    severity: impl Into<Severity>,
    data: impl Into<Value>,
) -> Result<&'a mut Fault, MarkError> {
    let data = data.into();
    if data.is_null() {
        return Err(MarkError::NullPayload);
    }
    attach(fault, severity, data)
}

/// Reads the mark on `fault` itself, without looking at its causes.
pub fn read(fault: &Fault) -> Option<&LogEntryMark> {
    fault.mark_slot()
}

impl Fault {
    pub fn mark(mut self, severity: impl Into<Severity>, data: impl Into<Value>) -> Self {
        self.remark(severity, data);
        self
    }

    pub fn mark_as_info(self, data: impl Into<Value>) -> Self {
        self.mark(Severity::Info, data)
    }

    pub fn mark_as_warn(self, data: impl Into<Value>) -> Self {
        self.mark(Severity::Warn, data)
    }

    pub fn mark_as_error(self, data: impl Into<Value>) -> Self {
        self.mark(Severity::Error, data)
    }

    /// Marks in place, e.g. on a fault borrowed from a `Result`.
    pub fn remark(&mut self, severity: impl Into<Severity>, data: impl Into<Value>) -> &mut Self {
        self.set_mark(LogEntryMark::new(severity.into(), data.into()));
        self
    }

    pub fn log_entry_mark(&self) -> Option<&LogEntryMark> {
        read(self)
    }
}

/// Marks the error side of a `Result` as it propagates.
pub trait MarkResultExt<T> {
    fn mark_err(self, severity: impl Into<Severity>, data: impl Into<Value>) -> Result<T, Fault>;
}

impl<T> MarkResultExt<T> for Result<T, Fault> {
    fn mark_err(self, severity: impl Into<Severity>, data: impl Into<Value>) -> Result<T, Fault> {
        self.map_err(|fault| fault.mark(severity, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessTier;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_attach_stores_mark() {
        let before = Utc::now();
        let mut fault = Fault::new("boom");

        attach(Some(&mut fault), Severity::Warn, json!({ "x": 1 })).unwrap();

        let mark = read(&fault).unwrap();
        assert_eq!(mark.severity(), Severity::Warn);
        assert_eq!(mark.data(), &json!({ "x": 1 }));
        assert!(mark.timestamp() >= before);
        assert!(mark.timestamp() <= Utc::now());
    }

    #[test]
    fn test_attach_missing_fault_fails() {
        let result = attach(None, Severity::Info, json!("data"));
        assert_eq!(result.unwrap_err(), MarkError::MissingFault);
    }

    #[test]
    fn test_attach_returns_same_fault_for_chaining() {
        let mut fault = Fault::new("boom");
        let marked = attach(Some(&mut fault), Severity::Info, json!(1)).unwrap();
        marked.remark(Severity::Error, json!(2));

        assert_eq!(read(&fault).unwrap().data(), &json!(2));
    }

    #[test]
    fn test_remark_replaces_previous_mark() {
        let fault = Fault::new("boom")
            .mark_as_info(json!("old"))
            .mark_as_error(json!("new"));

        let mark = read(&fault).unwrap();
        assert_eq!(mark.severity(), Severity::Error);
        assert_eq!(mark.data(), &json!("new"));
    }

    #[test]
    fn test_strict_rejects_null_payload() {
        let mut fault = Fault::new("boom");
        let result = attach_strict(Some(&mut fault), Severity::Info, Value::Null);
        assert_eq!(result.unwrap_err(), MarkError::NullPayload);
        assert!(read(&fault).is_none());

        assert!(attach_strict(Some(&mut fault), Severity::Info, json!({})).is_ok());
        assert!(attach_strict(None, Severity::Info, json!({})).is_err());
    }

    #[test]
    fn test_lenient_accepts_null_payload() {
        let mut fault = Fault::new("boom");
        assert!(attach(Some(&mut fault), Severity::Info, Value::Null).is_ok());
        assert_eq!(read(&fault).unwrap().data(), &Value::Null);
    }

    #[test]
    fn test_read_unmarked_is_none() {
        assert!(read(&Fault::new("quiet")).is_none());
    }

    #[test]
    fn test_read_does_not_look_at_causes() {
        let fault = Fault::with_inner("outer", Fault::new("inner").mark_as_info(json!(1)));
        assert!(read(&fault).is_none());
    }

    #[test]
    fn test_mark_accepts_business_tier() {
        let fault = Fault::new("declined").mark(BusinessTier::Anticipated, json!("retry later"));
        assert_eq!(fault.log_entry_mark().unwrap().severity(), Severity::Warn);
    }

    #[test]
    fn test_mark_err_marks_only_errors() {
        let failed: Result<(), Fault> = Err(Fault::new("boom"));
        let marked = failed.mark_err(Severity::Warn, json!("ctx")).unwrap_err();
        assert_eq!(marked.log_entry_mark().unwrap().data(), &json!("ctx"));

        let fine: Result<u8, Fault> = Ok(3);
        assert_eq!(fine.mark_err(Severity::Warn, json!("ctx")).unwrap(), 3);
    }
}

//! Upload Model
//!
//! Holds the staged file and whether a submission is on the wire.

use super::types::PendingUpload;

#[derive(Clone, Debug, Default)]
pub struct UploadModel {
    /// File picked by the user, awaiting (re)submission
    pub pending: Option<PendingUpload>,

    /// Whether an upload request is in flight
    pub in_flight: bool,
}

impl UploadModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file, replacing any previous selection
    pub fn select(&mut self, upload: PendingUpload) {
        self.pending = Some(upload);
    }

    /// Whether `begin_submit` would hand out a file
    pub fn can_submit(&self) -> bool {
        self.pending.is_some() && !self.in_flight
    }

    /// Mark a submission as started and return the file to send.
    ///
    /// Returns None when nothing is staged or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<PendingUpload> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        self.pending.clone()
    }

    /// Settle a submission of `submitted`.
    ///
    /// On success the selection is cleared, unless the user already staged a
    /// different file while the request was running. On failure the
    /// selection is left untouched so it can be resubmitted.
    pub fn finish_submit(&mut self, submitted: &PendingUpload, succeeded: bool) {
        self.in_flight = false;
        if succeeded && self.pending.as_ref() == Some(submitted) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn upload(name: &str) -> PendingUpload {
        PendingUpload {
            path: PathBuf::from(format!("/tmp/{}", name)),
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            size_bytes: 3,
        }
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut model = UploadModel::new();
        assert!(!model.can_submit());
        assert!(model.begin_submit().is_none());
        assert!(!model.in_flight);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut model = UploadModel::new();
        model.select(upload("a.txt"));
        model.select(upload("b.txt"));
        assert_eq!(model.pending.as_ref().map(|p| p.name.as_str()), Some("b.txt"));
    }

    #[test]
    fn test_no_second_submit_while_in_flight() {
        let mut model = UploadModel::new();
        model.select(upload("a.txt"));
        assert!(model.begin_submit().is_some());
        assert!(model.begin_submit().is_none());
    }

    #[test]
    fn test_success_clears_selection() {
        let mut model = UploadModel::new();
        model.select(upload("a.txt"));
        let sent = model.begin_submit().unwrap();
        model.finish_submit(&sent, true);
        assert!(model.pending.is_none());
        assert!(!model.in_flight);
    }

    #[test]
    fn test_failure_keeps_selection() {
        let mut model = UploadModel::new();
        model.select(upload("a.txt"));
        let sent = model.begin_submit().unwrap();
        model.finish_submit(&sent, false);
        assert_eq!(model.pending, Some(upload("a.txt")));
        assert!(model.can_submit());
    }

    #[test]
    fn test_success_keeps_newer_selection() {
        let mut model = UploadModel::new();
        model.select(upload("a.txt"));
        let sent = model.begin_submit().unwrap();
        model.select(upload("b.txt"));
        model.finish_submit(&sent, true);
        assert_eq!(model.pending, Some(upload("b.txt")));
    }
}

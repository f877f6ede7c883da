use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Notified { label: String, message: String },
    Failed { label: String, message: String },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, label: String, message: String) {
        let single_line = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {single_line}"));
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Notified { label, message } => self.set_message(label, message),
            Message::Failed { label, message } => {
                self.set_message(format!("ERR: {label}"), message)
            }
            Message::Cleared => {
                self.message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_notified() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Notified {
            label: "Navigate".to_string(),
            message: "/locationsuggest".to_string(),
        });
        assert_eq!(status_bar.message(), Some("[Navigate] /locationsuggest"));
    }

    #[test]
    fn test_failed_flattens_newlines() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Failed {
            label: "Terminal".to_string(),
            message: "broken\npipe".to_string(),
        });
        assert_eq!(status_bar.message(), Some("[ERR: Terminal] broken pipe"));
    }

    #[test]
    fn test_cleared() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Notified {
            label: "Info".to_string(),
            message: "hello".to_string(),
        });
        status_bar.update(Message::Cleared);
        assert_eq!(status_bar.message(), None);
    }
}

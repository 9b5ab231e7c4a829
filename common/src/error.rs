//! Error taxonomy of the console.
//!
//! None of these are fatal: every variant is turned into a message shown
//! inline or in a toast, and the user re-triggers the action manually.

use thiserror::Error;

/// Shown when the backend answers with something that is not JSON (an HTML
/// error page, a proxy failure) or the body cannot be parsed.
pub const SERVER_FAULT_MESSAGE: &str = "حدث خطأ في الخادم. يرجى المحاولة لاحقاً";

pub const MISSING_VEHICLE_MESSAGE: &str = "يرجى إدخال رقم المركبة أو رقم اللوحة";
pub const UNRESOLVED_VEHICLE_MESSAGE: &str = "يرجى البحث عن المركبة والتأكد منها أولاً";
pub const MISSING_TYPE_MESSAGE: &str = "يرجى اختيار نوع الملحق";
pub const INVALID_AMOUNT_MESSAGE: &str = "المبلغ يجب أن يكون رقماً صالحاً";

fn not_found_message(value: &str) -> String {
    format!("لم يتم العثور على مركبة بالرقم: {}", value)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    /// Input rejected before anything is sent.
    #[error("{0}")]
    Validation(String),

    /// The lookup went through but matched no record.
    #[error("{}", not_found_message(.0))]
    NotFound(String),

    /// Non-OK status or a network failure.
    #[error("{0}")]
    Transport(String),

    /// Non-JSON payload.
    #[error("{}", SERVER_FAULT_MESSAGE)]
    ServerFault,

    /// Well-formed response with `success: false`; the message is the backend's.
    #[error("{0}")]
    Rejected(String),
}

impl ConsoleError {
    pub fn transport_status(status: u16) -> Self {
        ConsoleError::Transport(format!("فشل تحميل البيانات (HTTP {})", status))
    }

    /// Text displayed to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

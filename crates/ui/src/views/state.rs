use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NoSelection,
    QuizFinished,
    UnknownOption,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoSelection => "Pick an answer before moving on.",
            Self::QuizFinished => "This round is over. Start a new one to keep practicing.",
            Self::UnknownOption => "That answer is not one of the choices.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoSelection => Self::NoSelection,
            SessionError::Completed => Self::QuizFinished,
            SessionError::UnknownOption(_) => Self::UnknownOption,
            _ => Self::Unknown,
        }
    }
}

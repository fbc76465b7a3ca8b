use super::ErrorCode;

pub fn all_codes() -> &'static [ErrorCode] {
    &[
        ErrorCode::ConfigInvalidJson,
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::FileNotFound,
        ErrorCode::FileNotRegular,
        ErrorCode::FileAlreadyExists,
        ErrorCode::OutputNotConfigured,
        ErrorCode::RandomSourceFailed,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
        ErrorCode::InternalUnexpected,
    ]
}

pub fn parse_code(code: &str) -> Option<ErrorCode> {
    all_codes()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == code)
}

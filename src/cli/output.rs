//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::ClientError;

/// Map domain/service errors to a string for stderr.
/// Keeps route handlers thin; controller-reply variants summarize the first
/// error reply when they escape without being rendered by the route.
pub fn map_error(e: &ClientError) -> String {
    match e {
        ClientError::Controller(replies) => {
            let first = replies
                .iter()
                .find(|reply| reply.return_code.is_error())
                .or_else(|| replies.first());
            match first {
                Some(reply) => format!("Error: {}", reply.message),
                None => e.to_string(),
            }
        }
        _ => e.to_string(),
    }
}

/// Process exit code for a client-side error.
///
/// Controller-reported outcomes carried by replies exit through
/// [`crate::aggregate::ExitStatus::process_code`] instead; this mapping
/// covers everything that stops a command on the client side.
pub fn error_exit_code(e: &ClientError) -> i32 {
    match e {
        ClientError::Internal(_) | ClientError::Protocol(_) => 1,
        ClientError::Validation(_) | ClientError::Config(_) => 2,
        ClientError::Controller(_) => 10,
        ClientError::Connection(_) => 20,
    }
}

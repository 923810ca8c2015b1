use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating Ctrl+C or Escape as a clean
/// exit that leaves `message` on stderr instead of an error.
pub fn handle_prompt_cancellation<F>(message: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            crate::status!("\n{}", Style::hint(message));
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_flow_ok() {
        assert!(handle_prompt_cancellation("cancelled", || Ok(())).is_ok());
    }

    #[test]
    fn test_cancel_and_interrupt_are_not_errors() {
        for err in [
            InquireError::OperationCanceled,
            InquireError::OperationInterrupted,
        ] {
            let result = handle_prompt_cancellation("cancelled", || Err(err.into()));
            assert!(result.is_ok());
        }
    }

    #[test]
    fn test_other_errors_propagate() {
        let result =
            handle_prompt_cancellation("cancelled", || Err(anyhow::anyhow!("disk full")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_custom_inquire_error_is_not_cancellation() {
        assert!(!is_prompt_cancelled(&InquireError::Custom("x".into())));
    }
}

use crate::core::{
    client::P4Client,
    error::Result,
    output::{print_error, print_json, print_tool_output},
};

/// Pass arbitrary arguments to `p4`.
///
/// Uses the raw three-value outcome: stdout is shown even when the tool also
/// wrote a diagnostic, and the diagnostic is reported as a warning. Only a
/// process-level failure makes the command fail.
pub async fn execute_run(client: &P4Client, args: &[String], json: bool) -> Result<()> {
    let outcome = client.run_command(args).await;

    if json {
        return print_json(&serde_json::json!({
            "error": outcome.error.as_ref().map(ToString::to_string),
            "stdout": outcome.stdout,
        }));
    }

    if let Some(stdout) = &outcome.stdout {
        print_tool_output(stdout);
    }

    match outcome.error {
        Some(error) if error.is_process_error() => Err(error),
        Some(error) => {
            print_error(&error.to_string());
            Ok(())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::P4NavigatorError;
    use crate::core::executor::ScriptedExecutor;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_diagnostic_is_not_fatal() {
        let executor = Arc::new(ScriptedExecutor::new());
        executor.push_stderr("yay\n", "warning: something\n");
        let client = P4Client::with_executor(executor);

        assert!(execute_run(&client, &["info".to_string()], false).await.is_ok());
    }

    #[tokio::test]
    async fn test_process_error_is_fatal() {
        let executor = Arc::new(ScriptedExecutor::new());
        executor.push_error(P4NavigatorError::command_failed(Some(1), "boom\n"));
        let client = P4Client::with_executor(executor);

        let err = execute_run(&client, &["info".to_string()], false).await.unwrap_err();
        assert_eq!(err.to_string(), "Command failed: boom");
    }
}

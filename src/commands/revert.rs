use crate::core::{client::P4Client, error::Result, output::print_action_output};

/// Revert `path`, or with `unchanged` only the open files that were not modified
pub async fn execute_revert(
    client: &P4Client,
    path: Option<&str>,
    unchanged: bool,
    json: bool,
) -> Result<()> {
    let output = if unchanged {
        client.revert_unchanged(path).await?
    } else {
        client.revert(path.unwrap_or("")).await?
    };
    print_action_output("revert", &output, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::ScriptedExecutor;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_revert_requires_path_unless_unchanged() {
        let executor = Arc::new(ScriptedExecutor::new());
        executor.push_stdout("//depot/path/to/file/foo.js#123 - was edit, reverted\n");
        let client = P4Client::with_executor(executor.clone());

        let err = execute_revert(&client, None, false, false).await.unwrap_err();
        assert_eq!(err.to_string(), "Please pass a file to revert!");
        assert!(executor.invocations().is_empty());

        assert!(execute_revert(&client, None, true, false).await.is_ok());
        assert_eq!(executor.invocations()[0].args, vec!["revert", "-a"]);
    }
}

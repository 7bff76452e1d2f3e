use crate::core::{client::P4Client, error::Result, output::print_action_output};

pub async fn execute_submit(
    client: &P4Client,
    path: &str,
    description: &str,
    json: bool,
) -> Result<()> {
    let output = client.submit(path, description).await?;
    print_action_output("submit", &output, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::ScriptedExecutor;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_submit_passes_description() {
        let executor = Arc::new(ScriptedExecutor::new());
        executor.push_stdout("Submitting change 123456.\nChange 123456 submitted.\n");
        let client = P4Client::with_executor(executor.clone());

        assert!(execute_submit(&client, "foo.js", "fix the thing", true).await.is_ok());
        assert_eq!(
            executor.invocations()[0].args,
            vec!["submit", "-d", "fix the thing", "foo.js"]
        );
    }
}

use crate::core::{client::P4Client, error::Result, output::print_action_output};

pub async fn execute_sync(client: &P4Client, path: Option<&str>, json: bool) -> Result<()> {
    let output = client.sync(path).await?;
    print_action_output("sync", &output, json)
}

pub async fn execute_sync_dir(
    client: &mut P4Client,
    dir: Option<&str>,
    recursive: bool,
    json: bool,
) -> Result<()> {
    let output = if recursive {
        client.recursive_sync_dir(dir).await?
    } else {
        client.sync_dir(dir).await?
    };
    print_action_output("sync", &output, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::ScriptedExecutor;
    use std::path::Path;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_sync_dir_changes_directory() {
        let executor = Arc::new(ScriptedExecutor::new());
        executor.push_stdout("foo.js - file(s) up-to-date.\n");
        let mut client = P4Client::with_executor(executor.clone());

        assert!(execute_sync_dir(&mut client, Some("/path/to/dir/"), true, false).await.is_ok());
        assert_eq!(client.pwd(), Path::new("/path/to/dir"));

        let invocation = &executor.invocations()[0];
        assert_eq!(invocation.args, vec!["sync", "..."]);
        assert_eq!(invocation.cwd, Path::new("/path/to/dir"));
    }
}

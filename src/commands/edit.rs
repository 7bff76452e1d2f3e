use crate::core::{client::P4Client, error::Result, output::print_action_output};

pub async fn execute_edit(client: &P4Client, path: &str, json: bool) -> Result<()> {
    let output = client.edit(path).await?;
    print_action_output("edit", &output, json)
}

pub async fn execute_add(client: &P4Client, path: &str, json: bool) -> Result<()> {
    let output = client.add(path).await?;
    print_action_output("add", &output, json)
}

/// Edit, or add when the file is not yet on the client
pub async fn execute_smart_edit(client: &P4Client, path: &str, json: bool) -> Result<()> {
    let output = client.smart_edit(path).await?;
    print_action_output("smart-edit", &output, json)
}

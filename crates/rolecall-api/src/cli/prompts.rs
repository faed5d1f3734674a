//! Prompt listing CLI command.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets};
use console::style;

use rolecall_core::repository::prompt::PromptRepository;
use rolecall_core::repository::role::PromptRoleRepository;
use rolecall_types::prompt::GuildId;

use crate::state::AppState;

/// List the prompts configured for a guild.
///
/// # Examples
///
/// ```bash
/// rolecall prompts 103735912737718272
/// rolecall prompts 103735912737718272 --json
/// ```
pub async fn list_prompts(state: &AppState, guild_id: u64, json: bool) -> Result<()> {
    let guild = GuildId(guild_id);
    let prompts = state.prompts.find_by_guild(guild).await?;

    if json {
        let mut entries = Vec::with_capacity(prompts.len());
        for prompt in &prompts {
            let roles = state.prompt_roles.find_by_prompt(prompt.id).await?;
            entries.push(serde_json::json!({
                "id": prompt.id.0,
                "title": prompt.title,
                "description": prompt.description,
                "use_buttons": prompt.use_buttons,
                "roles": roles.len(),
            }));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if prompts.is_empty() {
        println!();
        println!("  No prompts configured for guild {guild}.");
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Style", "Roles"]);

    for prompt in &prompts {
        let roles = state.prompt_roles.find_by_prompt(prompt.id).await?;
        let style_label = if prompt.use_buttons { "buttons" } else { "dropdown" };
        table.add_row(vec![
            prompt.id.to_string(),
            prompt.title.clone(),
            style_label.to_string(),
            roles.len().to_string(),
        ]);
    }

    println!();
    println!(
        "  {} prompt(s) for guild {}",
        style(prompts.len()).bold(),
        style(guild).cyan()
    );
    println!();
    println!("{table}");
    Ok(())
}

//! Plan command handler.

use super::commands::PostInput;
use crosspost::{CrosspostConfig, Dispatcher, NoOpTransport, Publisher};

/// Print the Telegram dispatch plan and run it without sending anything.
pub async fn handle_plan_command(
    config: CrosspostConfig,
    input: &PostInput,
    channel: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = input.read_content().await?;
    let publisher = Publisher::new(config).with_options(input.options());
    let publication = publisher.prepare(&content, input.media.as_slice()).await?;

    let plan = publisher.plan_messaging(&publication);
    println!("Telegram dispatch plan for {}", channel);
    println!("{:-<80}", "");
    for (i, step) in plan.iter().enumerate() {
        let files: Vec<String> = step
            .media()
            .iter()
            .map(|m| m.path().display().to_string())
            .collect();
        println!(
            "{}. {} [{}] caption: {} chars",
            i + 1,
            step.kind(),
            files.join(", "),
            step.text().chars().count()
        );
    }
    println!();

    let dispatcher = Dispatcher::new(NoOpTransport::new(), channel);
    match publisher.publish_messaging(&publication, &dispatcher).await? {
        Some(report) => println!(
            "Dry run delivered {} message(s): {}",
            report.message_ids().len(),
            report.message_ids().join(", ")
        ),
        None => println!("Telegram cannot publish this media"),
    }

    Ok(())
}

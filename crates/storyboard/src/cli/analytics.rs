//! Analytics command handler.

use super::backends::Backends;
use super::render::excerpt;
use storyboard::{AnalyticsRecorder, AnalyticsSummary, StoryboardResult, USER_ENV_VAR};

/// Print a user's generation records and totals.
pub async fn show_analytics(backends: &Backends, user: Option<String>) -> StoryboardResult<()> {
    let Some(user_id) = user.or_else(|| backends.current_user()) else {
        eprintln!("Error: No user given. Pass --user or set {}.", USER_ENV_VAR);
        std::process::exit(1);
    };

    let Some(recorder) = &backends.analytics else {
        println!("Analytics are disabled in configuration");
        return Ok(());
    };

    let records = recorder.list(&user_id).await?;
    let summary = AnalyticsSummary::from_records(&records);

    println!("Analytics for '{}':", user_id);
    println!("{:-<80}", "");
    for record in &records {
        println!(
            "{}  {:>3} scenes  {}",
            record.generated_at().format("%Y-%m-%d %H:%M:%S"),
            record.scenes_count(),
            excerpt(record.prompt(), 50)
        );
    }
    println!("{:-<80}", "");
    println!("Total prompts: {}", summary.total_prompts);
    println!("Total scenes:  {}", summary.total_scenes);

    Ok(())
}

use chesspath_core::{Path, PlayerNode, SearchConfig, SearchOutcome, SearchStats, TargetIdentity, TargetTable};

use crate::colors::ColorScheme;

pub struct DisplayOptions {
    pub hide_urls: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub profile_base_url: String,
}

pub fn display_search_info(
    username: &str,
    identity: &TargetIdentity,
    config: &SearchConfig,
    colors: &ColorScheme,
) {
    println!(
        "♞ Finding path from {} to {}",
        colors.player_name(&format!("\"{}\"", username)),
        colors.target_name(&identity.name)
    );
    println!(
        "⚙️  Exploring up to {} degrees, {} classical games per player",
        colors.number(&config.max_depth.to_string()),
        colors.number(&config.games_per_user.to_string())
    );

    if let Some(limit) = config.max_api_calls {
        println!(
            "🔝 Stopping after {} API calls",
            colors.number(&format_number(limit))
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    outcome: &SearchOutcome,
    identity: &TargetIdentity,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!("\n---\n");
    }

    match outcome {
        SearchOutcome::Found { path, .. } => {
            display_successful_path(path, identity, options, colors);
        }
        SearchOutcome::NotFound { reason, .. } | SearchOutcome::Failed { reason, .. } => {
            println!("{} {}", colors.error("❌"), colors.error(reason));
        }
    }

    if options.verbose {
        display_search_statistics(outcome.stats(), colors);
    }
}

fn display_successful_path(
    path: &Path,
    identity: &TargetIdentity,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    if !options.quiet {
        if path.is_trivial() {
            println!(
                "{} That's {}!\n",
                colors.success("✅"),
                colors.target_name(&identity.name)
            );
        } else {
            println!(
                "{} Your {} Number: {}\n",
                colors.success("✅"),
                colors.target_name(&identity.name),
                colors.number(&path.degree().to_string())
            );
        }
    }

    println!("{}", format_path_flow(path, colors));

    // Detailed list only outside quiet mode
    if !options.quiet {
        println!();
        for (step_index, player) in path.nodes().iter().enumerate() {
            println!("{}", format_path_step(step_index, player, options, colors));
        }
    }
}

pub fn format_path_flow(path: &Path, colors: &ColorScheme) -> String {
    path.nodes()
        .iter()
        .map(|player| colors.player_name(&player.username).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_path_step(
    step_index: usize,
    player: &PlayerNode,
    options: &DisplayOptions,
    colors: &ColorScheme,
) -> String {
    let step_number = format!("{}.", step_index + 1);
    let mut formatted_line = format!(
        "{:3} {} {}",
        colors.step_number(&step_number),
        colors.player_name(&player.username),
        colors.rating(&format!("(rating: {})", player.rating))
    );

    if !options.hide_urls {
        formatted_line.push_str(&format!(
            " - {}",
            colors.url(&profile_url(&options.profile_base_url, &player.username))
        ));
    }

    formatted_line
}

pub fn profile_url(base_url: &str, username: &str) -> String {
    format!("{}/@/{}", base_url.trim_end_matches('/'), username)
}

fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} players with {} API calls in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(stats.players_explored)),
        colors.number(&format_number(stats.api_calls)),
        colors.number(&format!("{:.3}", stats.duration_ms as f64 / 1000.0))
    );
    println!(
        "{} Pruned {} branches, deepest level reached: {}",
        colors.stats("✂️ "),
        colors.number(&format_number(stats.pruned_branches)),
        colors.number(&stats.max_depth_reached.to_string())
    );
}

pub fn display_targets(targets: &TargetTable, colors: &ColorScheme) {
    for (index, identity) in targets.iter().enumerate() {
        let marker = if index == 0 { " (default)" } else { "" };
        println!("{}{}", colors.target_name(&identity.name), marker);
        println!("    accounts: {}", identity.accounts.join(", "));
        if !identity.description.is_empty() {
            println!("    {}", identity.description);
        }
    }
}

pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

use std::sync::Arc;

use anyhow::{bail, Result};
use colored::Colorize;
use search_router::{
    Config, History, MemoryHistory, Navigator, PageParams, ResolvedRoute, Router, RouterError,
    Theme, ThemeProvider, Views,
};

/// Text stand-ins for the editor and navbar views
pub struct TerminalViews;

impl Views for TerminalViews {
    type Output = String;

    fn editor(&self) -> String {
        "editor (standalone form)".to_string()
    }

    fn page(&self, params: &PageParams) -> String {
        match params.dataset_id {
            Some(ref dataset_id) => format!("navbar: {} / dataset {}", params.page, dataset_id),
            None => format!("navbar: {}", params.page),
        }
    }
}

/// A step of a replayed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Visit(String),
    Back,
    Forward,
}

impl Step {
    pub fn parse(arg: &str) -> Self {
        match arg {
            "back" => Step::Back,
            "forward" => Step::Forward,
            url => Step::Visit(url.to_string()),
        }
    }
}

/// Outcome of one step: where the history ended up and what rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub location: String,
    pub rendered: Result<Option<String>, RouterError>,
}

fn render(
    provider: &ThemeProvider<Theme>,
    result: Result<Option<&ResolvedRoute>, RouterError>,
) -> Result<Option<String>, RouterError> {
    Ok(result?.and_then(|route| {
        provider
            .render(route, &TerminalViews)
            .map(|themed| format!("[{}] {}", themed.theme.name, themed.content))
    }))
}

/// Replays `steps`; the first step must be a visit and seeds the history
pub fn replay(router: Arc<Router>, config: &Config, steps: &[String]) -> Result<Vec<StepReport>> {
    let provider = ThemeProvider::new(config.theme.clone());
    let mut steps = steps.iter().map(|s| Step::parse(s));

    let initial = match steps.next() {
        Some(Step::Visit(url)) => url,
        Some(step) => bail!("session must start with a path, not {:?}", step),
        None => bail!("session needs at least one path"),
    };

    let mut nav = Navigator::new(router, MemoryHistory::new(&initial))
        .with_max_redirects(config.routing.max_redirects);
    let mut reports = Vec::new();

    let rendered = render(&provider, nav.sync());
    reports.push(StepReport {
        step: Step::Visit(initial),
        location: nav.history().location().to_string(),
        rendered,
    });

    for step in steps {
        let result = match step {
            Step::Visit(ref url) => nav.navigate(url),
            Step::Back => nav.back(),
            Step::Forward => nav.forward(),
        };
        let rendered = render(&provider, result);
        reports.push(StepReport {
            step,
            location: nav.history().location().to_string(),
            rendered,
        });
    }

    Ok(reports)
}

pub fn execute(router: Arc<Router>, config: &Config, steps: &[String]) -> Result<()> {
    println!("{}", "Replaying navigation session...".green().bold());
    println!();

    for report in replay(router, config, steps)? {
        let label = match report.step {
            Step::Visit(ref url) => url.clone(),
            Step::Back => "back".to_string(),
            Step::Forward => "forward".to_string(),
        };
        println!("{} {}", "→".cyan(), label.bold());
        println!("  location: {}", report.location);
        match report.rendered {
            Ok(Some(view)) => println!("  view:     {}", view.green()),
            Ok(None) => println!("  view:     {}", "nothing rendered".dimmed()),
            Err(e) => println!("  {}", e.to_string().red()),
        }
    }

    Ok(())
}

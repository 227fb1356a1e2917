use colored::Colorize;
use search_router::{OutcomeKind, Route, Router};

/// One table line: position, template, outcome
pub fn describe(index: usize, route: &Route) -> String {
    let outcome = match (route.kind(), route.redirect_to()) {
        (OutcomeKind::Redirect, Some(target)) => format!("redirect -> {}", target),
        (OutcomeKind::Redirect, None) => "redirect".to_string(),
        (OutcomeKind::RenderEditor, _) => "editor".to_string(),
        (OutcomeKind::RenderPage, _) => format!("page ({})", route.params().join(", ")),
    };
    format!("{}. {:<24} {}", index + 1, route.pattern(), outcome)
}

pub fn execute(router: &Router) {
    println!("{}", "Routes (first match wins):".green().bold());
    println!();

    for (index, route) in router.routes().iter().enumerate() {
        println!("  {}", describe(index, route));
    }

    let options = router.options();
    println!();
    println!(
        "case-insensitive: {}, strict trailing slash: {}, decode params: {}",
        options.case_insensitive, options.strict_trailing_slash, options.decode_params
    );

    for route in router.shadowed_routes() {
        println!(
            "{}",
            format!("⚠ {} is unreachable: an earlier rule matches it", route.pattern()).yellow()
        );
    }
}

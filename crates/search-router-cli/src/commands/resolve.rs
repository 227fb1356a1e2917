use anyhow::Result;
use colored::Colorize;
use search_router::{ResolvedRoute, Router};
use serde::Serialize;

/// One resolved path, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct Resolution<'a> {
    pub path: &'a str,
    pub route: Option<ResolvedRoute>,
}

pub fn resolve_all<'a>(router: &Router, paths: &'a [String]) -> Vec<Resolution<'a>> {
    paths
        .iter()
        .map(|path| Resolution {
            path,
            route: router.resolve(path),
        })
        .collect()
}

pub fn describe(resolution: &Resolution) -> String {
    match resolution.route {
        Some(ref route) => format!("{} => {}", resolution.path, route),
        None => format!("{} => no match", resolution.path),
    }
}

pub fn execute(router: &Router, paths: &[String], json: bool) -> Result<()> {
    let resolutions = resolve_all(router, paths);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    for resolution in &resolutions {
        let line = describe(resolution);
        match resolution.route {
            Some(ResolvedRoute::Redirect { .. }) => println!("{}", line.yellow()),
            Some(_) => println!("{}", line.green()),
            None => println!("{}", line.dimmed()),
        }
    }

    Ok(())
}

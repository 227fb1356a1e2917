use colored::Colorize;
use search_router::Theme;

pub fn execute(theme: &Theme) {
    println!("{}", "Active theme".green().bold());
    println!();
    println!("Name:        {}", theme.name.cyan());
    println!("Primary:     {}", theme.primary);
    println!("Secondary:   {}", theme.secondary);
    println!("Font family: {}", theme.font_family);
}

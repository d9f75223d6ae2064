use colored::Colorize;

use sd_town::SessionConfig;
use sd_town::session::render_result;

pub fn run(config: SessionConfig, number: Option<usize>) -> Result<(), String> {
    let mut session = super::open_session(config)?;

    let Some(number) = number else {
        println!("{}", session.render_dungeons());
        return Ok(());
    };
    if number == 0 {
        return Err("dungeon numbers start at 1".into());
    }

    let result = session
        .enter_dungeon(number - 1)
        .map_err(|e| e.to_string())?;
    super::persist(&session)?;

    let text = render_result(&result);
    let (headline, details) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    if result.cleared {
        println!("{}", headline.green().bold());
    } else {
        println!("{}", headline.red().bold());
    }
    println!("{details}");
    Ok(())
}

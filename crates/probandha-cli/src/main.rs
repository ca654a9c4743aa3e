use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use probandha_config::Config;
use probandha_engine::{Locale, ScanOptions, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod blocks;

use app::App;

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Mode {
    /// Interactive previewer over a posts folder (or the configured one).
    Preview { posts_path: Option<PathBuf> },
    /// Print one post's blocks as JSON and exit.
    Dump { post: PathBuf, locale: Option<Locale> },
}

fn parse_args(args: &[String]) -> Result<Mode> {
    match args {
        [_] => Ok(Mode::Preview { posts_path: None }),
        [_, flag, post] if flag == "--dump" => Ok(Mode::Dump {
            post: PathBuf::from(post),
            locale: None,
        }),
        [_, flag, post, locale_flag, locale] if flag == "--dump" && locale_flag == "--locale" => {
            Ok(Mode::Dump {
                post: PathBuf::from(post),
                locale: Some(locale.parse()?),
            })
        }
        [_, path] if !path.starts_with("--") => Ok(Mode::Preview {
            posts_path: Some(PathBuf::from(path)),
        }),
        _ => bail!("unrecognized arguments"),
    }
}

fn scan_options(config: Option<&Config>) -> ScanOptions {
    match config {
        Some(config) => ScanOptions {
            default_language: config.render.default_code_language.clone(),
        },
        None => ScanOptions::default(),
    }
}

fn config_locale(config: Option<&Config>) -> Locale {
    config
        .and_then(|c| match c.default_locale.parse() {
            Ok(locale) => Some(locale),
            Err(e) => {
                log::warn!("{e}; falling back to English");
                None
            }
        })
        .unwrap_or_default()
}

fn dump(post: PathBuf, locale: Option<Locale>, config: Option<&Config>) -> Result<()> {
    let file_name = post
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("'{}' is not a post file", post.display()))?;
    let root = match post.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let post = io::read_post(&RelativePathBuf::from(file_name), &root)?;
    let locale = locale.unwrap_or_else(|| config_locale(config));
    let blocks = post.blocks(locale, &scan_options(config));
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "probandha-cli".to_string());
    let config_path = Config::config_path();

    let mode = match parse_args(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [posts-folder-path]");
            eprintln!("       {program_name} --dump <post.json> [--locale en|bn]");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let posts_path = match mode {
        Mode::Dump { post, locale } => return dump(post, locale, config.as_ref()),
        Mode::Preview {
            posts_path: Some(path),
        } => path,
        Mode::Preview { posts_path: None } => match &config {
            Some(config) => config.posts_path.clone(),
            None => {
                eprintln!("Error: No posts path provided and no config file found");
                eprintln!("Usage: {program_name} <posts-folder-path>");
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        },
    };

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        eprintln!(
            "Error: Posts path '{}' is invalid: {e}",
            posts_path.display()
        );
        process::exit(1);
    }

    let mut app = App::new(
        posts_path,
        config_locale(config.as_ref()),
        scan_options(config.as_ref()),
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_post(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_post(),
                KeyCode::Tab => app.focus_next_gallery(),
                KeyCode::Right => app.gallery_next(),
                KeyCode::Left => app.gallery_previous(),
                KeyCode::Char('l') => app.toggle_locale(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| ListItem::new(Line::from(format!("📄 {}", post.display_name()))))
        .collect();

    let posts_list = List::new(post_items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Content panel
    let title = format!("Content [{}]", app.locale());
    let content = Paragraph::new(app.content_lines())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Post | "),
        Span::raw("Tab: Next gallery | ←/→: Image | "),
        Span::raw("l: Language"),
    ]);

    f.render_widget(Paragraph::new(help), rows[1]);
}

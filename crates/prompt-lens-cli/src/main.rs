mod app;
mod paint;

use anyhow::{Result, bail};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prompt_lens_config::{CategoryConfig, Config};
use prompt_lens_engine::{Catalog, Category, FileKind, ViewMode, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

const PAGE: u16 = 10;

#[derive(Parser, Debug)]
#[command(
    name = "prompt-lens",
    version,
    about = "Browse AI tool system prompts in the terminal"
)]
struct Cli {
    /// Folder holding one sub-folder per category (defaults to the config file)
    prompts_path: Option<PathBuf>,

    /// Category slug to open
    #[arg(short, long)]
    category: Option<String>,

    /// File to select within the category
    #[arg(short, long)]
    file: Option<String>,

    /// Start in raw view instead of the segmented view
    #[arg(long)]
    raw: bool,

    /// Print the selected file's content and exit
    #[arg(long)]
    dump: bool,

    /// Save the prompts path and category as defaults in the config file
    #[arg(long)]
    remember: bool,
}

/// Everything needed to open the browser, resolved from arguments and config.
#[derive(Debug)]
struct Startup {
    prompts_path: PathBuf,
    catalog: Catalog,
    category_index: usize,
    file: Option<String>,
    mode: ViewMode,
}

fn catalog_from_config(categories: &[CategoryConfig]) -> Catalog {
    if categories.is_empty() {
        return Catalog::builtin();
    }
    Catalog::new(
        categories
            .iter()
            .map(|c| Category::new(&c.slug, &c.name, &c.description, &c.folder))
            .collect(),
    )
}

fn resolve_startup(cli: &Cli, config: Option<Config>) -> Result<Startup> {
    let config_path = Config::config_path();
    let (prompts_path, from_config) = match (&cli.prompts_path, &config) {
        (Some(path), _) => (path.clone(), false),
        (None, Some(config)) => (config.prompts_path.clone(), true),
        (None, None) => bail!(
            "No prompts path provided and no config file found at {}",
            config_path.display()
        ),
    };

    // Validate prompts directory using engine
    if let Err(e) = io::validate_prompts_dir(&prompts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        bail!(
            "Prompts path '{}'{} is invalid: {e}",
            prompts_path.display(),
            source
        );
    }

    let catalog = catalog_from_config(
        config
            .as_ref()
            .map(|c| c.categories.as_slice())
            .unwrap_or_default(),
    );
    if catalog.is_empty() {
        bail!("No categories configured");
    }

    let slug = cli
        .category
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.default_category.clone()));
    let category_index = match slug {
        Some(slug) => match catalog.position(&slug) {
            Some(index) => index,
            None => {
                let known: Vec<&str> = catalog.iter().map(|c| c.slug.as_str()).collect();
                bail!(
                    "{}; available: {}",
                    io::IoError::UnknownCategory(slug),
                    known.join(", ")
                );
            }
        },
        None => 0,
    };

    Ok(Startup {
        prompts_path,
        catalog,
        category_index,
        file: cli.file.clone(),
        mode: if cli.raw {
            ViewMode::Raw
        } else {
            ViewMode::Styled
        },
    })
}

/// The config to write back for `--remember`, based on whatever was loaded.
fn remembered_config(config: Option<Config>, startup: &Startup) -> Config {
    let mut config = config.unwrap_or_else(|| Config::new(startup.prompts_path.clone()));
    config.prompts_path = startup.prompts_path.clone();
    config.default_category = startup
        .catalog
        .get(startup.category_index)
        .map(|c| c.slug.clone());
    config
}

fn main() -> Result<()> {
    // Initialize logging; warnings only by default so the TUI stays readable
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if cli.prompts_path.is_some() => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: prompt-lens <prompts-folder-path>");
            process::exit(1);
        }
    };

    let startup = match resolve_startup(&cli, config.clone()) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: prompt-lens [prompts-folder-path] [--category <slug>] [--file <name>]");
            process::exit(1);
        }
    };

    if cli.remember {
        remembered_config(config, &startup).save()?;
        log::info!("Saved defaults to {}", Config::config_path().display());
    }

    let mut app = App::new(
        startup.prompts_path,
        startup.catalog,
        startup.category_index,
        startup.file.as_deref(),
        startup.mode,
    )?;

    if cli.dump {
        for line in app.content_text() {
            println!("{line}");
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
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
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Right | KeyCode::Tab => app.next_category()?,
                KeyCode::Left | KeyCode::BackTab => app.previous_category()?,
                KeyCode::Char('r') => app.toggle_mode(),
                KeyCode::PageDown => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                _ => {}
            }
        }
    }
}

fn file_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Prompt => "📄 ",
        FileKind::Tool => "🔧 ",
        FileKind::Model => "🧠 ",
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Category tabs
    let titles: Vec<String> = app.catalog().iter().map(|c| c.name.clone()).collect();
    let description = app.category().description.clone();
    let tabs = Tabs::new(titles)
        .select(app.category_index())
        .block(Block::default().borders(Borders::ALL).title(description))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[1]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            let display_text = format!("{}{}", file_icon(file.kind()), file.name());
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, columns[0], &mut app.file_list_state);

    // Content panel
    let title = match (app.selected_file(), app.mode()) {
        (Some(file), ViewMode::Styled) => file.name().to_string(),
        (Some(file), ViewMode::Raw) => format!("{} (raw)", file.name()),
        (None, _) => "Content".to_string(),
    };
    let content = Paragraph::new(app.current_content.clone())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, columns[1]);

    // Instructions
    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("←/→ Tab: Category | "),
        Span::raw("↑/k ↓/j: File | "),
        Span::raw("r: Raw/Styled | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]));
    f.render_widget(help, rows[2]);
}

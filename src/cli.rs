use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};

use event_calendar::models::event::{Event, NewEvent};
use event_calendar::models::event_type::{find_event_type, DEFAULT_EVENT_COLOR, DEFAULT_EVENT_TYPE};
use event_calendar::models::settings::Settings;
use event_calendar::models::view::{hour_label, ViewType};
use event_calendar::services::agenda::{generate_notifications, schedule_summary};
use event_calendar::services::event::{sort_by_start_time, EventFilter, EventStore};
use event_calendar::services::reschedule::generate_suggestions;
use event_calendar::services::settings::SettingsService;
use event_calendar::utils::clock::{Clock, FixedClock, SystemClock};
use event_calendar::utils::date::{
    format_time, get_event_duration, get_month_days, get_week_days, get_year_months,
    is_current_month, is_today, WallClock,
};

const SHORT_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Parser)]
#[command(name = "event-calendar", version, about = "Calendar views, conflicts and reschedule suggestions")]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD[ HH:MM]) as "now"
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a day, week, month or year view
    View {
        #[arg(long)]
        view: Option<ViewType>,
        /// Anchor date, defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Event type filter, or "all"
        #[arg(long = "type")]
        event_type: Option<String>,
    },
    /// List every conflict group
    Conflicts,
    /// Propose conflict-free slots for an event
    Suggest { id: i64 },
    /// List events, optionally for one date or type
    Events {
        #[arg(long)]
        date: Option<String>,
        #[arg(long = "type")]
        event_type: Option<String>,
    },
    /// Check a new event against the calendar
    Add {
        title: String,
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "09:00")]
        start: String,
        #[arg(long, default_value = "10:00")]
        end: String,
        #[arg(long, default_value = DEFAULT_EVENT_COLOR)]
        color: String,
        #[arg(long = "type", default_value = DEFAULT_EVENT_TYPE)]
        event_type: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Today's counters and notifications
    Agenda,
    /// Show or initialise the settings file
    Config {
        /// Print the settings file location only
        #[arg(long)]
        path: bool,
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    pub fn settings_service(&self) -> SettingsService {
        match &self.config {
            Some(path) => SettingsService::new(path),
            None => SettingsService::with_default_location(),
        }
    }

    fn clock(&self) -> Box<dyn Clock> {
        match &self.today {
            Some(date) => Box::new(FixedClock(WallClock::parse(date))),
            None => Box::new(SystemClock),
        }
    }
}

pub fn run(cli: Cli, settings_service: &SettingsService, settings: Settings) -> Result<()> {
    let now = cli.clock().now();
    if !now.is_valid() {
        return Err(anyhow!("Invalid --today value: {:?}", cli.today));
    }

    let command = cli.command.unwrap_or(Commands::View {
        view: None,
        date: None,
        event_type: None,
    });

    if let Commands::Config { path, init } = command {
        return config(settings_service, &settings, path, init);
    }

    let mut store = EventStore::from_seed(&settings)?;

    match command {
        Commands::View {
            view,
            date,
            event_type,
        } => {
            let view = view.unwrap_or(settings.default_view);
            let anchor = parse_date_or(date.as_deref(), &now)?;
            let filter = filter_or(event_type.as_deref(), &settings);
            render_view(&store, view, &anchor, &filter, &now);
        }
        Commands::Conflicts => render_conflicts(&store),
        Commands::Suggest { id } => {
            let event = store
                .get(id)
                .ok_or_else(|| anyhow!("Event {} not found", id))?;
            render_suggestions(&store, event);
        }
        Commands::Events { date, event_type } => {
            let filter = filter_or(event_type.as_deref(), &settings);
            let mut events: Vec<&Event> = match date {
                Some(date) => {
                    let day = parse_date_or(Some(&date), &now)?;
                    store
                        .events_for_date(&day)
                        .into_iter()
                        .filter(|e| filter.matches(e))
                        .collect()
                }
                None => store.filter_by_type(&filter),
            };
            events.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
            for event in events {
                println!("{}", event_line(event));
            }
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            color,
            event_type,
            description,
        } => {
            let draft = NewEvent::new(title, date)
                .times(start, end)
                .color(color)
                .event_type(event_type)
                .description(description);
            let created = store.add(draft)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&created).context("Failed to serialize event")?
            );

            let clashes = store.conflicting_with(created.id);
            if !clashes.is_empty() {
                println!("\nConflicts with:");
                for event in &clashes {
                    println!("  {}", event_line(event));
                }
                render_suggestions(&store, &created);
            }
        }
        Commands::Agenda => render_agenda(store.events(), &now),
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn config(service: &SettingsService, settings: &Settings, path: bool, init: bool) -> Result<()> {
    if path {
        println!("{}", service.path().display());
        return Ok(());
    }

    if init {
        service.save(settings)?;
        println!("Wrote {}", service.path().display());
        return Ok(());
    }

    print!(
        "{}",
        toml::to_string_pretty(settings).context("Failed to serialize settings")?
    );
    Ok(())
}

fn parse_date_or(date: Option<&str>, now: &WallClock) -> Result<WallClock> {
    match date {
        None => Ok(*now),
        Some(raw) => {
            let parsed = WallClock::parse(raw);
            if parsed.is_valid() {
                Ok(parsed)
            } else {
                Err(anyhow!("Invalid date: {:?}", raw))
            }
        }
    }
}

fn filter_or(event_type: Option<&str>, settings: &Settings) -> EventFilter {
    EventFilter::from(event_type.unwrap_or(&settings.default_filter))
}

fn type_label(event_type: &str) -> String {
    match find_event_type(event_type) {
        Some(option) => option.display_name(),
        None => event_type.to_string(),
    }
}

fn event_line(event: &Event) -> String {
    format!(
        "#{:<3} {} {} - {} ({} min)  {}  [{}]",
        event.id,
        event.date,
        format_time(&event.start_time),
        format_time(&event.end_time),
        get_event_duration(&event.start_time, &event.end_time),
        event.title,
        type_label(&event.event_type)
    )
}

fn render_view(
    store: &EventStore,
    view: ViewType,
    anchor: &WallClock,
    filter: &EventFilter,
    now: &WallClock,
) {
    println!(
        "{}    (prev: {}, next: {})",
        view.title(anchor),
        view.previous(anchor).format("YYYY-MM-DD"),
        view.next(anchor).format("YYYY-MM-DD")
    );

    let stats = store.stats(anchor, filter);
    println!(
        "{} events, {} shown, {} this month, {} conflict group(s) overall\n",
        stats.total_events, stats.filtered_events, stats.month_events, stats.conflict_groups
    );

    match view {
        ViewType::Day => render_day(store, anchor, filter),
        ViewType::Week => render_week(store, anchor, filter, now),
        ViewType::Month => render_month(store, anchor, filter, now),
        ViewType::Year => render_year(store, anchor, filter),
    }
}

fn day_events<'a>(store: &'a EventStore, day: &WallClock, filter: &EventFilter) -> Vec<&'a Event> {
    let mut events: Vec<&Event> = store
        .events_for_date(day)
        .into_iter()
        .filter(|event| filter.matches(event))
        .collect();
    sort_by_start_time(&mut events);
    events
}

fn render_day(store: &EventStore, anchor: &WallClock, filter: &EventFilter) {
    let events = day_events(store, anchor, filter);
    let conflicts = store.day_conflicts(anchor, filter);

    for hour in 0..24 {
        let prefix = format!("{:02}:", hour);
        let starting: Vec<&&Event> = events
            .iter()
            .filter(|event| event.start_time.starts_with(&prefix))
            .collect();
        if starting.is_empty() {
            continue;
        }
        for event in starting {
            let flag = if conflicts.iter().any(|g| g.contains(event.id)) {
                "!"
            } else {
                " "
            };
            println!("{:>5} {} {}", hour_label(hour), flag, event_line(event));
        }
    }

    if events.is_empty() {
        println!("No events");
    }
}

fn render_week(store: &EventStore, anchor: &WallClock, filter: &EventFilter, now: &WallClock) {
    for day in get_week_days(anchor) {
        let marker = if is_today(&day, now) { ">" } else { " " };
        let weekday = day
            .naive()
            .map(|dt| SHORT_WEEKDAYS[dt.weekday().num_days_from_sunday() as usize])
            .unwrap_or("???");
        println!("{}{} {}", marker, weekday, day.format("YYYY-MM-DD"));
        for event in day_events(store, &day, filter) {
            println!("      {}", event_line(event));
        }
    }
}

fn render_month(store: &EventStore, anchor: &WallClock, filter: &EventFilter, now: &WallClock) {
    println!("{}", SHORT_WEEKDAYS.map(|d| format!("{:>5}", d)).concat());

    let days = get_month_days(anchor);
    for week in days.chunks(7) {
        let row: String = week.iter().map(|day| month_cell(store, day, anchor, filter, now)).collect();
        println!("{}", row);
    }

    println!("\n  [n] today   * events   ! conflict\n");
    let mut events = store.events_in_month(anchor, filter);
    events.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
    for event in events {
        println!("{}", event_line(event));
    }
}

fn month_cell(
    store: &EventStore,
    day: &WallClock,
    anchor: &WallClock,
    filter: &EventFilter,
    now: &WallClock,
) -> String {
    if !is_current_month(day, anchor) {
        return format!("{:>5}", ".");
    }

    let number = day.get_date().unwrap_or(0);
    let mark = if !store.day_conflicts(day, filter).is_empty() {
        "!"
    } else if !day_events(store, day, filter).is_empty() {
        "*"
    } else {
        " "
    };

    if is_today(day, now) {
        format!("[{:>2}]{}", number, mark)
    } else {
        format!("{:>4}{}", number, mark)
    }
}

fn render_year(store: &EventStore, anchor: &WallClock, filter: &EventFilter) {
    for grid in get_year_months(anchor) {
        let count = store.events_in_month(&grid.month, filter).len();
        println!(
            "{:<10} {:>2} weeks  {:>3} event(s)",
            grid.month.format("MMMM"),
            grid.days.len() / 7,
            count
        );
    }
}

fn render_conflicts(store: &EventStore) {
    let groups = store.conflicts();
    if groups.is_empty() {
        println!("No conflicts");
        return;
    }

    for group in groups {
        println!("{} ({} events)", group.date(), group.len());
        for event in group.events() {
            println!("  {}", event_line(event));
        }
    }
}

fn render_suggestions(store: &EventStore, event: &Event) {
    println!("\nSuggestions for \"{}\":", event.title);
    let suggestions = generate_suggestions(event, store.events());
    if suggestions.is_empty() {
        println!("  No free slots in the next week");
    }
    for (index, slot) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} {} - {}",
            index + 1,
            slot.date,
            format_time(&slot.start_time),
            format_time(&slot.end_time)
        );
    }
}

fn render_agenda(events: &[Event], now: &WallClock) {
    let summary = schedule_summary(events, now);
    println!(
        "Today: {}   This week: {}   Upcoming: {}",
        summary.today_events, summary.week_events, summary.upcoming_events
    );

    for notification in generate_notifications(events, now) {
        println!("[{}] {}: {}", notification.time, notification.title, notification.message);
    }
}

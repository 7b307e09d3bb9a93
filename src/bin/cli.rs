use std::io::{self, Write};
use timetable_tool::{
    JsonFileStore, Period, TimetableStore, current_and_next, export_week_to_csv,
    import_week_from_csv, week,
};

const DATA_FILE: &str = "timetable.json";

const MIN_PERIODS: usize = 1;
const MAX_PERIODS: usize = 12;

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    // Build output
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    // Header
    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    // Rows
    for row in rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_day_table(periods: &[Period]) -> String {
    let rows: Vec<Vec<String>> = periods
        .iter()
        .map(|p| vec![p.start.clone(), p.end.clone(), p.subject.clone()])
        .collect();
    render_table(&["start", "end", "subject"], &rows)
}

fn print_help() {
    println!(
        "Commands:\n  help                 Show this help\n  today                Show today's current and next period\n  show <day>           Show one day's periods\n  week                 Show the full week timetable\n  edit <day>           Re-enter a day's periods and save\n  export <file.csv>    Export the week as CSV rows\n  import <file.csv>    Replace the timetable from CSV rows\n  quit|exit            Exit"
    );
}

fn prompt(stdin: &io::Stdin, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn show_today(store: &JsonFileStore) {
    let timetable = match store.load_timetable() {
        Ok(t) => t,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    let today = week::today_name();
    match timetable.day(&today) {
        None => println!("No timetable found for today."),
        Some(periods) => {
            let status = current_and_next(periods, &week::now_hhmm());
            println!("Today: {}", week::day_title(&today));
            println!("Current: {}", status.current);
            println!("Next: {}", status.next);
        }
    }
}

fn show_day(store: &JsonFileStore, day: &str) {
    if !week::is_weekday(day) {
        println!("Unknown day '{}' (use monday..sunday)", day);
        return;
    }
    let timetable = match store.load_timetable() {
        Ok(t) => t,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    match timetable.day(day) {
        None => println!("No timetable found for {}.", day),
        Some(periods) => {
            println!("{}", week::day_title(day));
            println!("{}", render_day_table(periods));
        }
    }
}

fn show_week(store: &JsonFileStore) {
    let timetable = match store.load_timetable() {
        Ok(t) => t,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    if timetable.is_empty() {
        println!("No timetable data available.");
        return;
    }
    for day in week::WEEKDAYS {
        if let Some(periods) = timetable.day(day) {
            println!("{}", week::day_title(day));
            println!("{}", render_day_table(periods));
        }
    }
}

fn edit_day(store: &JsonFileStore, stdin: &io::Stdin, day: &str) {
    if !week::is_weekday(day) {
        println!("Unknown day '{}' (use monday..sunday)", day);
        return;
    }

    let count_s = match prompt(stdin, "Number of periods (including breaks)") {
        Ok(s) => s,
        Err(_) => return,
    };
    let count: usize = match count_s.parse() {
        Ok(n) if (MIN_PERIODS..=MAX_PERIODS).contains(&n) => n,
        _ => {
            println!("Invalid count (expected {}..={})", MIN_PERIODS, MAX_PERIODS);
            return;
        }
    };

    let mut periods = Vec::with_capacity(count);
    for i in 0..count {
        println!("Period {}", i + 1);
        let start = match prompt(stdin, "  Start (HH:MM)") {
            Ok(s) => s,
            Err(_) => return,
        };
        let end = match prompt(stdin, "  End (HH:MM)") {
            Ok(s) => s,
            Err(_) => return,
        };
        let subject = match prompt(stdin, "  Subject ('break' or 'lunch' for breaks)") {
            Ok(s) => s,
            Err(_) => return,
        };

        // Incomplete rows are skipped, not rejected
        if !start.is_empty() && !end.is_empty() && !subject.is_empty() {
            periods.push(Period::new(start, end, subject));
        }
    }

    let mut timetable = match store.load_timetable() {
        Ok(t) => t,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    timetable.set_day(day, periods);
    match store.save_timetable(&timetable) {
        Ok(()) => println!("Timetable saved."),
        Err(e) => println!("Error: {}", e),
    }
}

fn export_csv(store: &JsonFileStore, file: &str) {
    let timetable = match store.load_timetable() {
        Ok(t) => t,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    match export_week_to_csv(&timetable, file) {
        Ok(()) => println!("Week exported => {}", file),
        Err(e) => println!("Error: {}", e),
    }
}

fn import_csv(store: &JsonFileStore, file: &str) {
    match import_week_from_csv(file) {
        Ok(timetable) => match store.save_timetable(&timetable) {
            Ok(()) => println!("Timetable imported and saved."),
            Err(e) => println!("Error: {}", e),
        },
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    let store = JsonFileStore::new(DATA_FILE);

    println!("Timetable Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "today" => {
                show_today(&store);
            }
            "show" => match parts.next() {
                Some(day) => show_day(&store, day),
                None => println!("Usage: show <day>"),
            },
            "week" => {
                show_week(&store);
            }
            "edit" => match parts.next() {
                Some(day) => edit_day(&store, &stdin, day),
                None => println!("Usage: edit <day>"),
            },
            "export" => match parts.next() {
                Some(file) => export_csv(&store, file),
                None => println!("Usage: export <file.csv>"),
            },
            "import" => match parts.next() {
                Some(file) => import_csv(&store, file),
                None => println!("Usage: import <file.csv>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}

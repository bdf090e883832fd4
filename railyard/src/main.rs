#![deny(warnings)]

use railyard::{evaluate, Context};

fn report(result: Result<Option<f64>, railyard::Error>) {
    match result {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => (),
        Err(err) => println!("error: {:?}", err),
    }
}

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        let mut ctx = Context::new();
        report(evaluate(&input, &mut ctx));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|home| home.join(".railyard_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut ctx = Context::new();
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("readline error: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                report(evaluate(&line, &mut ctx));
            }
        }
    }
    if let Some(ref path) = histpath {
        let _ = rl.save_history(path);
    }
    Ok(())
}

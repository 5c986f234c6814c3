//! Terminal scoreboard client. Talks to the backend when it is reachable and
//! falls back to the local cache file when it is not.
//! Run with: cargo run --bin cli -- <game>
//! Override with env: SCOREBOARD_URL (e.g. http://127.0.0.1:8080),
//! SCOREBOARD_CACHE (e.g. .scoreboard_cache.json).

use scoreboard_web::{GameKey, HttpRemote, LocalCache, Player, RosterView, SaveOutcome, SyncClient};
use std::io::{self, BufRead, Write};

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_cache_path() -> String {
    ".scoreboard_cache.json".to_string()
}

fn find_id(roster: &[Player], name: &str) -> Option<String> {
    roster
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| p.id.clone())
}

fn report(outcome: Option<SaveOutcome>) {
    match outcome {
        Some(SaveOutcome::Remote { .. }) => {}
        Some(SaveOutcome::Local) => println!("(sem conexão com o servidor; salvo localmente)"),
        None => println!("Nada a fazer."),
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let base_url = std::env::var("SCOREBOARD_URL").unwrap_or_else(|_| default_base_url());
    let cache_path = std::env::var("SCOREBOARD_CACHE").unwrap_or_else(|_| default_cache_path());
    let game = std::env::args().nth(1).unwrap_or_else(|| "uno".to_string());
    let key = GameKey::from_raw(&game);

    let sync = SyncClient::new(HttpRemote::new(base_url), LocalCache::new(cache_path));
    let mut view = RosterView::new(key, sync);
    view.refresh().await;

    println!("Placar — jogo '{}'", game);
    println!("Comandos: add <nome> | win <nome> | undo <nome> | rm <nome> | per <pontos> | reset | list | quit");
    print!("{}", view.render_table());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        match cmd {
            "" => {}
            "quit" | "exit" => break,
            "list" => {
                view.refresh().await;
                print!("{}", view.render_list());
            }
            "per" => match arg.parse() {
                Ok(per) => view.set_points_per_win(per),
                Err(_) => println!("Uso: per <pontos>"),
            },
            "add" => {
                if arg.is_empty() {
                    println!("Digite um nome.");
                    continue;
                }
                report(view.add_player(arg).await);
                print!("{}", view.render_table());
            }
            "win" => {
                match find_id(view.roster(), arg) {
                    Some(id) => report(view.record_win(&id).await),
                    None => println!("Jogador não encontrado."),
                }
                print!("{}", view.render_table());
            }
            "undo" => {
                match find_id(view.roster(), arg) {
                    Some(id) => report(view.revoke_win(&id).await),
                    None => println!("Jogador não encontrado."),
                }
                print!("{}", view.render_table());
            }
            "rm" => {
                match find_id(view.roster(), arg) {
                    Some(id) => report(Some(view.remove_player(&id).await)),
                    None => println!("Jogador não encontrado."),
                }
                print!("{}", view.render_table());
            }
            "reset" => {
                report(Some(view.reset().await));
                print!("{}", view.render_table());
            }
            _ => println!("Comando desconhecido: {}", cmd),
        }
    }
    Ok(())
}

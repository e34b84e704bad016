use book_catalog::{
    client::{CatalogApi, CatalogView, HttpCatalogApi, PAGE_SIZE_OPTIONS},
    config::ClientConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "commands: next | prev | page <n> | size <5|10|25|50> | sort | quit";

/// 端末から入力されたコマンド
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    Page(i64),
    Size(i64),
    Sort,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()?.to_ascii_lowercase().as_str() {
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Previous,
        "page" => Command::Page(parts.next()?.parse().ok()?),
        "size" => {
            let size = parts.next()?.parse().ok()?;
            // 選択肢にないサイズはヘルプを表示する
            if !PAGE_SIZE_OPTIONS.contains(&size) {
                return None;
            }
            Command::Size(size)
        }
        "sort" | "s" => Command::Sort,
        "quit" | "q" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        _ => return None,
    };
    Some(command)
}

async fn run<A: CatalogApi>(view: &mut CatalogView<A>) -> std::io::Result<()> {
    view.mount().await;
    println!("{}\n{HELP}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Next) => view.next_page().await,
            Some(Command::Previous) => view.previous_page().await,
            Some(Command::Page(n)) => view.change_page(n).await,
            Some(Command::Size(n)) => view.change_page_size(n).await,
            Some(Command::Sort) => view.toggle_sort_order().await,
            Some(Command::Quit) => break,
            Some(Command::Help) | None => {
                println!("{HELP}");
                continue;
            }
        }
        println!("{}", view.render());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 画面出力と混ざらないようログは標準エラーへ
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api = %config.api_base_url, "catalog view starting");

    let mut view = CatalogView::new(HttpCatalogApi::new(config.api_base_url));
    run(&mut view).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("  PREV "), Some(Command::Previous));
        assert_eq!(parse_command("page 3"), Some(Command::Page(3)));
        assert_eq!(parse_command("size 25"), Some(Command::Size(25)));
        assert_eq!(parse_command("sort"), Some(Command::Sort));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("page"), None);
        assert_eq!(parse_command("page three"), None);
        assert_eq!(parse_command("jump 2"), None);
        assert_eq!(parse_command("size 7"), None);
        assert_eq!(parse_command("size 0"), None);
    }
}

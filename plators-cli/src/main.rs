use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use plators_client::{
    AdminFilter, AdminScreen, Category, CategoryFilter, ClientError, LoadState, Notice, Post,
    PostCollection, PostDraft, PostsClient, PublicScreen,
};
use tracing_subscriber::{EnvFilter, fmt};

mod output;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api/posts";

#[derive(Debug, Parser)]
#[command(name = "plators-cli", version, about = "Терминальный клиент блога PLATORS")]
struct Cli {
    /// URL коллекции постов.
    #[arg(long, global = true, env = "PLATORS_API_URL", default_value = DEFAULT_API_URL)]
    api: String,

    /// Уровень логирования (в stderr).
    #[arg(long, global = true, env = "PLATORS_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Публичная лента опубликованных постов.
    Feed {
        #[arg(long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
    },
    /// Управление постами.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Все посты с вкладками "все / опубликованные / черновики".
    List {
        #[arg(long, default_value_t = AdminFilter::All)]
        filter: AdminFilter,
    },
    /// Создание поста.
    Create {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: FieldArgs,
        /// Сразу опубликовать.
        #[arg(long)]
        published: bool,
    },
    /// Редактирование поста: не указанные поля остаются прежними.
    Edit {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(long)]
        published: Option<bool>,
    },
    /// Удаление поста.
    Delete {
        #[arg(long)]
        id: i64,
        /// Не спрашивать подтверждение.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Default, Args)]
struct FieldArgs {
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    category: Option<Category>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    video_url: Option<String>,
}

impl FieldArgs {
    fn apply(self, draft: &mut PostDraft) {
        if let Some(excerpt) = self.excerpt {
            draft.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
        if let Some(video_url) = self.video_url {
            draft.video_url = video_url;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let client = PostsClient::new(normalize_api_url(cli.api)).map_err(map_client_error)?;

    match cli.command {
        Command::Feed { category } => run_feed(client, category).await,
        Command::Admin(command) => run_admin(client, command).await,
    }
}

async fn run_feed(client: PostsClient, category: CategoryFilter) -> Result<()> {
    let mut screen = PublicScreen::new(client);
    screen.mount().await;
    screen.state_mut().set_filter(category);

    print!("{}", output::render_listing(&screen.state().view()));
    Ok(())
}

async fn run_admin(client: PostsClient, command: AdminCommand) -> Result<()> {
    let mut screen = AdminScreen::new(client);
    let outcome = execute_admin(&mut screen, command, |id, post| {
        confirm_from(io::stdin().lock(), io::stderr(), id, post)
    })
    .await?;

    print!("{}", outcome.stdout);
    if !outcome.succeeded {
        return Err(anyhow!("операция не выполнена"));
    }
    Ok(())
}

/// Текст для stdout и итог самой команды.
#[derive(Debug)]
struct AdminOutcome {
    stdout: String,
    succeeded: bool,
}

/// Выполняет команду админки над `screen`.
///
/// Уведомления первичной загрузки попадают в вывод, но на итог влияют
/// только для команд, которым нужен список (`list`, `edit`, `delete`).
async fn execute_admin<C, F>(
    screen: &mut AdminScreen<C>,
    command: AdminCommand,
    confirm: F,
) -> Result<AdminOutcome>
where
    C: PostCollection,
    F: FnOnce(i64, Option<&Post>) -> io::Result<bool>,
{
    screen.mount().await;
    let load_failed = screen.state().load_state() == LoadState::Failed;

    let mut stdout = String::new();
    let succeeded = match command {
        AdminCommand::List { filter } => {
            push_notices(&mut stdout, screen.state_mut().drain_notices());
            if !load_failed {
                stdout.push_str(&output::render_admin(screen.state(), filter));
            }
            !load_failed
        }
        AdminCommand::Create {
            title,
            fields,
            published,
        } => {
            push_notices(&mut stdout, screen.state_mut().drain_notices());
            let state = screen.state_mut();
            state.open_create();
            let draft = state.editing_mut();
            draft.title = title;
            draft.published = published;
            fields.apply(draft);
            screen.save().await
        }
        AdminCommand::Edit {
            id,
            title,
            fields,
            published,
        } => {
            if load_failed {
                return Err(anyhow!("не удалось загрузить статьи"));
            }
            if !screen.state_mut().open_edit(id) {
                return Err(anyhow!("пост id={id} не найден"));
            }
            let draft = screen.state_mut().editing_mut();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(published) = published {
                draft.published = published;
            }
            fields.apply(draft);
            screen.save().await
        }
        AdminCommand::Delete { id, yes } => {
            if load_failed {
                return Err(anyhow!("не удалось загрузить статьи"));
            }
            let post = screen.state().posts().iter().find(|post| post.id == id);
            let confirmed = yes || confirm(id, post)?;
            if !confirmed {
                stdout.push_str("Удаление отменено\n");
                return Ok(AdminOutcome {
                    stdout,
                    succeeded: true,
                });
            }
            screen.delete(id, |_| true).await
        }
    };

    push_notices(&mut stdout, screen.state_mut().drain_notices());
    Ok(AdminOutcome { stdout, succeeded })
}

fn push_notices(stdout: &mut String, notices: Vec<Notice>) {
    for notice in &notices {
        stdout.push_str(&output::render_notice(notice));
        stdout.push('\n');
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn normalize_api_url(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url;
    }

    format!("http://{url}")
}

/// Спрашивает `[y/N]`; согласием считается только `y`/`yes` (или `д`/`да`).
fn confirm_from<R: BufRead, W: Write>(
    mut input: R,
    mut prompt: W,
    id: i64,
    post: Option<&Post>,
) -> io::Result<bool> {
    match post {
        Some(post) => write!(prompt, "Удалить статью \"{}\" (id={id})? [y/N] ", post.title)?,
        None => write!(prompt, "Удалить статью id={id}? [y/N] ")?,
    }
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    ))
}

fn map_client_error(err: ClientError) -> anyhow::Error {
    let message = match err {
        ClientError::NotFound => "пост не найден".to_string(),
        ClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        ClientError::Status { status, message } => format!("ошибка сервера {status}: {message}"),
        ClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

//! Command-line driver for the diary screen controller
//!
//! Runs the controller against a live diary service, for manual testing.
//!
//! Usage:
//!   my_diary show 42
//!   my_diary edit 42 --target emotion
//!   my_diary publish 42
//!   my_diary delete 42
//!
//! Environment (a `.env` file is read first):
//!   DIARY_API_BASE_URL       service root (or --base-url)
//!   DIARY_API_TIMEOUT_SECS   request timeout, default 30
//!   DIARY_ACCESS_TOKEN       bearer token (or --token)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use my_diary::{
    Acknowledgment, ClientConfig, DiaryController, EditTarget, HttpResourceClient,
    NavigationRequest, ViewState,
};

#[derive(Parser, Debug)]
#[command(name = "my_diary")]
#[command(about = "Load, edit, publish or delete a diary from the command line")]
struct Args {
    /// Diary service root URL
    #[arg(long, env = "DIARY_API_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Bearer token attached to every request
    #[arg(long, env = "DIARY_ACCESS_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a diary and print what the screen would show
    Show { diary_id: String },
    /// Resolve the edit prompt and print the navigation it leads to
    Edit {
        diary_id: String,
        #[arg(long, value_enum)]
        target: EditChoice,
    },
    /// Print the analysis handoff for a loaded diary
    Analyze { diary_id: String },
    /// Publish a diary to the community
    Publish { diary_id: String },
    /// Delete a diary
    Delete { diary_id: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EditChoice {
    Emotion,
    Content,
}

impl From<EditChoice> for EditTarget {
    fn from(choice: EditChoice) -> Self {
        match choice {
            EditChoice::Emotion => EditTarget::Emotion,
            EditChoice::Content => EditTarget::Content,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.base_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = HttpResourceClient::new(&config)?;

    match args.command {
        Command::Show { diary_id } => {
            let mut controller = DiaryController::new(client, diary_id, args.token);
            print_view(controller.reload().await);
        }
        Command::Edit { diary_id, target } => {
            let mut controller = DiaryController::new(client, diary_id, args.token);
            if loaded(&mut controller).await {
                controller.request_edit()?;
                print_navigation(&controller.choose_edit_target(target.into())?);
            }
        }
        Command::Analyze { diary_id } => {
            let mut controller = DiaryController::new(client, diary_id, args.token);
            if loaded(&mut controller).await {
                print_navigation(&controller.analyze()?);
            }
        }
        Command::Publish { diary_id } => {
            let mut controller = DiaryController::new(client, diary_id, args.token);
            if loaded(&mut controller).await {
                controller.request_publish()?;
                print_acknowledgment(&controller.confirm_publish().await?);
                controller.decline_publish();
            }
        }
        Command::Delete { diary_id } => {
            let controller = DiaryController::new(client, diary_id, args.token);
            print_acknowledgment(&controller.delete().await);
        }
    }

    Ok(())
}

async fn loaded(controller: &mut DiaryController<HttpResourceClient>) -> bool {
    let view = controller.reload().await;
    if view.is_ready() {
        true
    } else {
        print_view(view);
        false
    }
}

fn print_view(view: &ViewState) {
    match view {
        ViewState::Loading => println!("로딩 중..."),
        ViewState::Failed(error) => {
            println!("[오류] {}", error);
            println!("일기 데이터를 불러올 수 없습니다.");
        }
        ViewState::Ready { diary, emotion } => {
            let display = diary.display();
            println!("{}", display.date_caption);
            if let Some(time) = &display.time_caption {
                println!("{}", time);
            }
            if let Some(photo) = diary.photo() {
                println!("[photo] {}", photo);
            }
            println!();
            println!("{}", diary.title);
            println!("{}", diary.content);
            println!();
            println!("emotion: {}", emotion.emotion_id);
        }
    }
}

fn print_acknowledgment(ack: &Acknowledgment) {
    println!("[{}] {}", ack.title, ack.message);
    if let Some(navigation) = &ack.on_confirm {
        print_navigation(navigation);
    }
}

fn print_navigation(navigation: &NavigationRequest) {
    println!("-> {}", navigation);
}

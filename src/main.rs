use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use conduit::api::ArticleFilter;
use conduit::config::Config;
use conduit::guard::{guard, GuardOutcome, RouteAccess};
use conduit::model::{Article, ArticleDraft, UpdateUser};
use conduit::state::form::FormKind;
use conduit::state::{selectors, RequestStatus, RootState};
use conduit::Conduit;

/// Terminal client for a RealWorld blogging backend
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and remember the session
    Login { email: String, password: String },
    /// Create an account and sign in
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Change the signed-in user's password
    Password { password: String },
    /// List popular tags
    Tags,
    /// List articles
    Feed {
        /// Only articles with this tag
        #[arg(long, conflicts_with_all = ["author", "favorited", "mine"])]
        tag: Option<String>,
        /// Only articles by this author
        #[arg(long, conflicts_with_all = ["favorited", "mine"])]
        author: Option<String>,
        /// Only articles favorited by this user
        #[arg(long, conflicts_with = "mine")]
        favorited: Option<String>,
        /// Articles from followed authors
        #[arg(long)]
        mine: bool,
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show an article with its comments
    Article { slug: String },
    /// Toggle the favorite flag of an article
    Favorite { slug: String },
    /// Comment on an article
    Comment { slug: String, body: String },
    /// Delete one of your comments
    Uncomment { slug: String, id: u64 },
    /// Show a profile, optionally toggling follow
    Profile {
        username: String,
        #[arg(long)]
        toggle_follow: bool,
    },
    /// Publish a new article
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        body: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Delete one of your articles
    Delete { slug: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    conduit::logging::init_tracing();
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let client = Conduit::from_config(&config).context("failed to build API client")?;
    client.boot().await;

    run(&client, args.command).await
}

async fn run(client: &Conduit, command: Command) -> anyhow::Result<()> {
    let store = client.store();
    match command {
        Command::Login { email, password } => {
            require(client, RouteAccess::GuestOnly)?;
            let status = client.login(&email, &password).await;
            form_result(status, store.select(|s| s.sign_in.display_error(FormKind::Auth)))?;
            print_user(&store.state());
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            require(client, RouteAccess::GuestOnly)?;
            let status = client.register(&username, &email, &password).await;
            form_result(status, store.select(|s| s.sign_up.display_error(FormKind::Auth)))?;
            print_user(&store.state());
        }
        Command::Logout => {
            client.logout();
            println!("Signed out.");
        }
        Command::Whoami => {
            require(client, RouteAccess::UserOnly)?;
            print_user(&store.state());
        }
        Command::Password { password } => {
            require(client, RouteAccess::UserOnly)?;
            let update = UpdateUser {
                password: Some(password),
                ..Default::default()
            };
            let status = client.update_user(&update).await;
            form_result(status, store.select(|s| s.settings.display_error(FormKind::Other)))?;
            println!("Password updated.");
        }
        Command::Tags => {
            client.fetch_tags().await;
            let home = store.select(|s| s.home.clone());
            if home.status.is_failed() {
                bail!("Could not load tags.");
            }
            println!("{}", home.tags.join("  "));
        }
        Command::Feed {
            tag,
            author,
            favorited,
            mine,
            page,
        } => {
            let page_size = client.api().page_size();
            let status = if mine {
                require(client, RouteAccess::UserOnly)?;
                client
                    .fetch_feed(ArticleFilter::default().page(page, page_size))
                    .await
            } else {
                let filter = ArticleFilter {
                    tag,
                    author,
                    favorited,
                    ..Default::default()
                }
                .page(page, page_size);
                client.fetch_articles(filter).await
            };
            if status.is_failed() {
                bail!("Could not load articles.");
            }
            let state = store.state();
            for article in selectors::all_articles(&state) {
                print_preview(article);
            }
            println!(
                "-- page {} of {}",
                page + 1,
                state.articles.page_count(page_size).max(1)
            );
        }
        Command::Article { slug } => {
            if client.open_article(&slug).await.is_failed() {
                bail!("Could not load article '{}'.", slug);
            }
            let state = store.state();
            if let Some(article) = &state.article_page.article {
                print_preview(article);
                println!("\n{}\n", article.body);
            }
            for comment in &state.article_page.comments {
                let own = if selectors::can_delete_comment(&state, comment) {
                    " (yours)"
                } else {
                    ""
                };
                println!(
                    "#{} {} on {}{}\n  {}",
                    comment.id,
                    comment.author.username,
                    comment.created_at.format("%Y-%m-%d"),
                    own,
                    comment.body
                );
            }
        }
        Command::Favorite { slug } => {
            require(client, RouteAccess::UserOnly)?;
            if client.open_article(&slug).await.is_failed()
                || client.toggle_favorite(&slug).await.is_failed()
            {
                bail!("Could not update favorite for '{}'.", slug);
            }
            if let Some(article) = store.select(|s| selectors::article_by_slug(s, &slug).cloned()) {
                print_preview(&article);
            }
        }
        Command::Comment { slug, body } => {
            require(client, RouteAccess::UserOnly)?;
            client.open_article(&slug).await;
            client.update_draft(body);
            if client.post_comment().await.is_failed() {
                bail!("Could not post comment.");
            }
            if let Some(comment) = store.select(|s| s.article_page.comments.last().cloned()) {
                println!("Posted comment #{}.", comment.id);
            }
        }
        Command::Uncomment { slug, id } => {
            require(client, RouteAccess::UserOnly)?;
            client.open_article(&slug).await;
            if client.delete_comment(id).await.is_failed() {
                bail!("Could not delete comment #{}.", id);
            }
            println!("Deleted comment #{}.", id);
        }
        Command::Profile {
            username,
            toggle_follow,
        } => {
            if client.open_profile(&username).await.is_failed() {
                bail!("Could not load profile '{}'.", username);
            }
            if toggle_follow {
                require(client, RouteAccess::UserOnly)?;
                if client.toggle_follow().await.is_failed() {
                    bail!("Could not update follow state.");
                }
            }
            let state = store.state();
            if let Some(profile) = &state.profile.profile {
                let following = if profile.following { " (following)" } else { "" };
                println!("{}{}", profile.username, following);
                if let Some(bio) = &profile.bio {
                    println!("{}", bio);
                }
            }
            for article in selectors::all_articles(&state) {
                print_preview(article);
            }
        }
        Command::Publish {
            title,
            description,
            body,
            tags,
        } => {
            require(client, RouteAccess::UserOnly)?;
            let draft = ArticleDraft {
                title,
                description,
                body,
                tag_list: ArticleDraft::parse_tags(&tags),
            };
            if client.create_article(&draft).await.is_failed() {
                bail!("Could not publish article.");
            }
            if let Some(article) = store.select(|s| s.editor.last_saved.clone()) {
                println!("Published '{}'.", article.slug);
            }
        }
        Command::Delete { slug } => {
            require(client, RouteAccess::UserOnly)?;
            if client.delete_article(&slug).await.is_failed() {
                bail!("Could not delete '{}'.", slug);
            }
            println!("Deleted '{}'.", slug);
        }
    }
    Ok(())
}

fn require(client: &Conduit, access: RouteAccess) -> anyhow::Result<()> {
    match client.store().select(|s| guard(access, &s.session)) {
        GuardOutcome::Render => Ok(()),
        GuardOutcome::Redirect if access == RouteAccess::GuestOnly => {
            bail!("Already signed in.")
        }
        GuardOutcome::Redirect => bail!("Sign in first."),
        GuardOutcome::Pending => bail!("Session is still loading."),
    }
}

fn form_result(status: RequestStatus, message: Option<&'static str>) -> anyhow::Result<()> {
    if status.is_failed() {
        bail!(message.unwrap_or("Request failed."));
    }
    Ok(())
}

fn print_user(state: &RootState) {
    if let Some(user) = selectors::current_user(state) {
        println!("{} <{}>", user.username, user.email);
    }
}

fn print_preview(article: &Article) {
    let heart = if article.favorited { "♥" } else { "♡" };
    println!(
        "{} {:>3}  {}  [{}]  by {} on {}",
        heart,
        article.favorites_count,
        article.title,
        article.slug,
        article.author.username,
        article.created_at.format("%Y-%m-%d")
    );
    if !article.tag_list.is_empty() {
        println!("        #{}", article.tag_list.join(" #"));
    }
}

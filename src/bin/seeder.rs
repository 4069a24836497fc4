use bcrypt::{hash, DEFAULT_COST};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use insightsync::models::models::{NewCollection, NewInsight, NewUser};
use insightsync::schema::{collections, insights, users};
use std::env;
use uuid::Uuid;

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("Seeding database...");

    let mut conn = establish_connection();

    clean_db(&mut conn);

    let alice = seed_user(&mut conn, "alice", "alice@example.com", "Alice", "secret1");
    let bob = seed_user(&mut conn, "bob", "bob@example.com", "Bob", "secret2");

    let focus = seed_insight(
        &mut conn,
        alice,
        "The Power of Focus",
        Some("https://example.com/focus"),
        "Eliminate distractions to produce high-leverage output.",
        &["productivity", "focus"],
        "public",
    );
    let journal = seed_insight(
        &mut conn,
        alice,
        "Daily Journaling",
        None,
        "Writing one page a day clarifies thinking.",
        &["habits"],
        "private",
    );
    let compounding = seed_insight(
        &mut conn,
        bob,
        "Compounding Knowledge",
        Some("https://example.com/compounding"),
        "Small daily reading sessions add up over years.",
        &["learning", "habits"],
        "public",
    );

    seed_collection(
        &mut conn,
        alice,
        "Reading List",
        Some("Things worth revisiting"),
        "public",
        vec![focus, compounding],
    );
    seed_collection(&mut conn, alice, "Private Notes", None, "private", vec![journal]);

    println!("Database seeded successfully!");
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("Cleaning database...");
    sql_query("TRUNCATE users, insights, collections CASCADE")
        .execute(conn)
        .expect("Error truncating tables");
}

fn seed_user(
    conn: &mut PgConnection,
    username: &str,
    email: &str,
    display_name: &str,
    password: &str,
) -> Uuid {
    let password_hash = hash(password, DEFAULT_COST).expect("Error hashing password");

    diesel::insert_into(users::table)
        .values(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            display_name: display_name.to_string(),
        })
        .returning(users::id)
        .get_result(conn)
        .expect("Error seeding user")
}

fn seed_insight(
    conn: &mut PgConnection,
    user_id: Uuid,
    title: &str,
    source: Option<&str>,
    takeaway: &str,
    tags: &[&str],
    visibility: &str,
) -> Uuid {
    diesel::insert_into(insights::table)
        .values(NewInsight {
            user_id,
            title: title.to_string(),
            source: source.map(str::to_string),
            takeaway: takeaway.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            visibility: visibility.to_string(),
        })
        .returning(insights::id)
        .get_result(conn)
        .expect("Error seeding insight")
}

fn seed_collection(
    conn: &mut PgConnection,
    user_id: Uuid,
    name: &str,
    description: Option<&str>,
    visibility: &str,
    insight_ids: Vec<Uuid>,
) {
    diesel::insert_into(collections::table)
        .values(NewCollection {
            user_id,
            name: name.to_string(),
            description: description.map(str::to_string),
            visibility: visibility.to_string(),
            insight_ids,
        })
        .execute(conn)
        .expect("Error seeding collection");
}

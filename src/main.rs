// Movie Catalog - CLI Demo
// Seeds a catalog in memory and walks through every query projection.

use anyhow::Result;
use movie_catalog::Catalog;

fn main() -> Result<()> {
    println!("🎬 Movie Catalog v{}", movie_catalog::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut catalog = Catalog::new();

    // 1. Add movies
    println!("\n📥 Adding movies...");
    catalog.add_movie(
        "1".to_string(),
        "Inception".to_string(),
        "Christopher Nolan".to_string(),
        2010,
        "Sci-Fi".to_string(),
    )?;
    catalog.add_movie(
        "2".to_string(),
        "Interstellar".to_string(),
        "Christopher Nolan".to_string(),
        2014,
        "Sci-Fi".to_string(),
    )?;
    catalog.add_movie(
        "3".to_string(),
        "The Dark Knight".to_string(),
        "Christopher Nolan".to_string(),
        2008,
        "Action".to_string(),
    )?;
    println!("✓ Catalog contains {} movies", catalog.len());

    // 2. Rate them
    println!("\n⭐ Rating movies...");
    catalog.rate_movie("1", 5)?;
    catalog.rate_movie("1", 4)?;
    catalog.rate_movie("2", 5)?;
    catalog.rate_movie("3", 4)?;
    println!("✓ Ratings recorded");

    // 3. Query projections
    println!("\n🏆 Top rated movies:");
    print_movies(&catalog.top_rated_movies());

    println!("\n🔭 Movies by genre (Sci-Fi):");
    print_movies(&catalog.movies_by_genre("Sci-Fi"));

    println!("\n🎥 Movies by director (Christopher Nolan):");
    print_movies(&catalog.movies_by_director("Christopher Nolan"));

    println!("\n🔍 Search for 'Inter':");
    print_movies(&catalog.search_by_keyword("Inter"));

    // 4. Removal
    println!("\n🗑️  Removing movie ID '3'...");
    let removed = catalog.remove_movie("3");
    println!("✓ Removed: {}", removed);

    println!("\n🏆 Top rated movies after removal:");
    print_movies(&catalog.top_rated_movies());

    Ok(())
}

fn print_movies(movies: &[movie_catalog::Movie]) {
    if movies.is_empty() {
        println!("   (none)");
        return;
    }
    for movie in movies {
        match movie.average_rating() {
            Some(avg) => println!(
                "   {} ({}) - {} - avg {:.2}",
                movie.title, movie.release_year, movie.director, avg
            ),
            None => println!(
                "   {} ({}) - {} - unrated",
                movie.title, movie.release_year, movie.director
            ),
        }
    }
}

use dlalbum::title::sanitize_title;

/// Print a raw title with its junk removed
pub fn print_clean_title(raw_title: &str, album: Option<&str>, artist: Option<&str>) {
    let clean = sanitize_title(raw_title, album.unwrap_or_default(), artist.unwrap_or_default());
    println!("{}", clean);
}

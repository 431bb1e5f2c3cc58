// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
             _                                            
  _   _ _ __| |_   _   _ __ ___  _ __ ___   __ _ _ __    
 | | | | '__| | | | | | '__/ _ \| '_ ` _ \ / _` | '_ \   
 | |_| | |  | | |_| | | | | (_) | | | | | | (_| | | | |  
  \__,_|_|  |_|\__,_| |_|  \___/|_| |_| |_|\__,_|_| |_|  

    Urdu → Roman-Urdu Translator
"#;
    println!("{}", banner);
}

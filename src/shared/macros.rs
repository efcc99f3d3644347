/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result<_, SimError>` or reports the error and exits with its code.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                error!("ERROR: {}", e);
                println!("{}", e);
                std::process::exit(e.exit_code());
            }
        }
    };
}

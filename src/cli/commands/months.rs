use crate::errors::AppResult;
use crate::models::Month;

pub fn handle() -> AppResult<()> {
    for m in Month::ALL {
        println!("{:>2}  {}", m.number(), m.sheet_name());
    }
    Ok(())
}

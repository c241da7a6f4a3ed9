use crate::error::AppError;
use clap::Args;
use serde_json::json;

use full_course::{Catalog, CourseId};

#[derive(Args, Debug, Default)]
pub(crate) struct ListingArgs {
    /// Only print challenges a given course is eligible for
    #[arg(long)]
    pub(crate) course: Option<String>,
}

pub(crate) fn run_listing(args: ListingArgs) -> Result<(), AppError> {
    let filter = args.course.as_deref().map(parse_course).transpose()?;

    let catalog = Catalog::standard();
    let listing: Vec<_> = catalog
        .challenges()
        .filter(|(_, challenge)| {
            filter.is_none_or(|course| challenge.courses.contains(&course))
        })
        .map(|(id, challenge)| {
            json!({
                "id": id.0,
                "description": challenge.description,
                "courses": challenge.courses,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn parse_course(name: &str) -> Result<CourseId, AppError> {
    CourseId::ALL
        .into_iter()
        .find(|course| course.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::UnknownCourse(name.to_string()))
}

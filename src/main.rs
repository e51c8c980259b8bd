use course_enroll_core::app::{EnrollmentFlow, EnrollmentView, Step};
use course_enroll_core::catalog::CourseCatalog;
use course_enroll_core::client::request::create_client;
use course_enroll_core::config::AppConfig;
use course_enroll_core::error::Result;
use course_enroll_core::interface::Navigator;
use course_enroll_core::logger::setup_simple_logger;
use course_enroll_core::model::structs::CardDetails;

/// Prints destinations instead of routing.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        println!("=> {path}");
    }
}

fn print_view(view: &EnrollmentView) {
    println!("=====================================");
    println!("{}", view.heading);
    println!("Course Price: {}", view.price_label);
    for item in &view.included {
        println!("  - {item}");
    }
    if let Some(ref error) = view.error {
        println!("Error: {error}");
    }
    if let Some(ref button) = view.enroll_button {
        println!("[{}]", button.label);
    }
    if let Some(ref button) = view.pay_button {
        println!("[{}]", button.label);
    }
    if let Some(ref hint) = view.test_card {
        println!("Test Card: {} / {} / {}", hint.number, hint.expiry, hint.cvc);
    }
    println!("=====================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_simple_logger(log::LevelFilter::Info)?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 && args.len() != 6 {
        println!(
            "用法: {} [课程ID] [卡号 有效期 CVC 持卡人]",
            args[0]
        );
        return Ok(());
    }

    let config = AppConfig::load()?;
    let course = match args.get(1).or(config.course_id.as_ref()) {
        Some(course_id) => CourseCatalog::landing().get(course_id)?.clone(),
        None => CourseCatalog::enrollment_stand_in(),
    };

    let card = match args.get(2..6) {
        Some([number, expiry, cvc, name]) => CardDetails::new(number, expiry, cvc, name),
        _ => CardDetails::new("4242 4242 4242 4242", "12/30", "123", "John Doe"),
    };

    let client = create_client(&config.api_base_url).await?;
    let flow = EnrollmentFlow::new(course, client, config.authenticated, ConsoleNavigator)
        .with_payment_delay(config.payment_delay());

    print_view(&EnrollmentView::new(flow.course(), &flow.state()));

    let step = match flow.begin_enrollment().await {
        Ok(Step::PaymentRequired) => {
            print_view(&EnrollmentView::new(flow.course(), &flow.state()));
            flow.submit_payment(&card).await
        }
        other => other,
    };

    print_view(&EnrollmentView::new(flow.course(), &flow.state()));

    match step {
        Ok(step) => println!("Finished: {step:?}"),
        Err(e) => println!("Enrollment did not complete: {e}"),
    }

    Ok(())
}

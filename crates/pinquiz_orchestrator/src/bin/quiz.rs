use pinquiz_orchestrator::{QuizConfig, create_backend, load_question_set};
use pinquiz_runtime::poller::Poller;
use pinquiz_runtime::rig::LineRig;
use pinquiz_runtime::runner::{EndReason, QuizRunner};
use pinquiz_runtime::signaler::Signaler;

const EXIT_COMPLETED: i32 = 0;
const EXIT_SETUP_FAILED: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_QUIT: i32 = 3;
const EXIT_INPUT_FAILED: i32 = 4;

fn usage() -> ! {
    eprintln!(
        "Usage: quiz [config.toml]\n\
         \n\
         Examples:\n\
           cargo run -p pinquiz_orchestrator --bin quiz\n\
           cargo run -p pinquiz_orchestrator --bin quiz -- config/quiz_cdev.toml\n\
         \n\
         Notes:\n\
         - Without a config file the stock wiring on gpiochip0 is used.\n\
         - Exit codes: 0 quiz completed, 1 setup failed, 3 quit by user,\n\
           4 aborted on input failure."
    );
    std::process::exit(EXIT_USAGE)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match QuizConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config: {e}");
                std::process::exit(EXIT_SETUP_FAILED);
            }
        },
        None => QuizConfig::default(),
    };
    if args.next().is_some() {
        usage();
    }

    let questions = match load_question_set(&config) {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("failed to load questions: {e}");
            std::process::exit(EXIT_SETUP_FAILED);
        }
    };

    let mut backend = match create_backend(&config) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("failed to create line backend: {e}");
            std::process::exit(EXIT_SETUP_FAILED);
        }
    };

    let mut rig = match LineRig::setup(&mut backend, &config.lines) {
        Ok(rig) => rig,
        Err(e) => {
            eprintln!("failed to set up quiz lines: {e}");
            std::process::exit(EXIT_SETUP_FAILED);
        }
    };

    println!("Program Quiz");

    let runner = QuizRunner::new(
        Poller::new(config.runtime.poll_interval()),
        Signaler::new(config.runtime.feedback_hold()),
    );
    let report = match runner.run(&mut rig, &questions, &mut std::io::stdout()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("writing quiz output failed: {e}");
            rig.teardown();
            std::process::exit(EXIT_SETUP_FAILED);
        }
    };
    rig.teardown();

    std::process::exit(match report.end {
        EndReason::Completed => EXIT_COMPLETED,
        EndReason::QuitByUser => EXIT_QUIT,
        EndReason::InputFailed => EXIT_INPUT_FAILED,
    })
}

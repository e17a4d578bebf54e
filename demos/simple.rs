use disparser::{
    either,
    info_command,
    optional,
    BooleanArgument,
    Color,
    ColorArgument,
    Command,
    CommandHandler,
    CommandModule,
    CommandSyntaxError,
    Either,
    EnumArgument,
    IntegerArgument,
    LogFeedbackHandler,
    SimpleFeedbackHandler,
    StringArgument,
};
use flexi_logger::Logger;

#[derive(Debug, Clone, Copy, EnumArgument)]
enum Coin {
    Heads,
    Tails,
}

struct Member {
    name: &'static str,
    admin: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_str("debug")?.start()?;

    let handler = CommandHandler::<Member>::builder()
        .prefix("!")
        .command(
            Command::<Member>::new("add")
                .alias("sum")
                .argument(IntegerArgument::new())
                .argument(IntegerArgument::clamped(0, 100))
                .argument(optional(BooleanArgument))
                .executes(|context| {
                    let sum = context.parsed_result_or(0, 0i32) + context.parsed_result_or(1, 0i32);
                    let message = if context.parsed_result_or(2, false) {
                        format!("{} says the sum is {:#x}", context.source().name, sum)
                    } else {
                        format!("{} says the sum is {}", context.source().name, sum)
                    };
                    context.feedback().send_success(&message);
                    Ok(())
                }),
        )
        .command(
            Command::<Member>::new("flip")
                .argument(EnumArgument::<Coin>::new())
                .argument(either(IntegerArgument::min(1), StringArgument::new()))
                .executes(|context| {
                    let call = context.parsed_result::<Coin>(0).copied();
                    let bet = context.parsed_result::<Either<i32, String>>(1);
                    context
                        .feedback()
                        .send_feedback(&format!("Called {:?} betting {:?}", call, bet));
                    Ok(())
                }),
        )
        .command(
            Command::<Member>::new("paint")
                .requires(|member| member.admin)
                .argument(ColorArgument::new())
                .executes(|context| match context.parsed_result::<Color>(0) {
                    Some(color) => {
                        context.feedback().send_success(&format!("Painted {:?}", color));
                        Ok(())
                    }
                    None => Err(CommandSyntaxError::execution("no colour was parsed")),
                }),
        )
        .command(info_command("Try !add, !flip or !paint", vec![("add", "!add <a> <b> [hex]")]))
        .build();

    let feedback = SimpleFeedbackHandler::new(|message| println!("{}\n", message));
    let guest = Member {
        name: "guest",
        admin: false,
    };
    let admin = Member {
        name: "admin",
        admin: true,
    };

    for input in &[
        "!add 1 2",
        "!sum 7",
        "!add 4 5 true",
        "!add 4 500",
        "!flip tails 20",
        "!flip heads all-in",
        "!paint orange",
        "!info add",
        "!info",
    ] {
        println!("> {}", input);
        let outcome = handler.dispatch(input, &guest, &feedback);
        println!("({:?})", outcome);
    }

    println!("> !paint 16711680 (as admin)");
    handler.dispatch("!paint 16711680", &admin, &feedback);
    println!("Suggestions for \"!s\": {:?}", handler.get_suggestions("!s", &guest));

    // The same commands, with feedback going through the logger instead of stdout.
    let logged = LogFeedbackHandler::default();
    handler.dispatch("!paint light_gray", &admin, &logged);
    handler.dispatch("!paint light_gray", &guest, &logged);
    handler.dispatch("!add 1", &guest, &logged);

    Ok(())
}

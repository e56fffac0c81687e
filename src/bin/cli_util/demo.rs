use autoclose::demos::Demo;
use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum BinDemo {
    ReadGreeting,
    GreetingMissing,
    GreetingMissingGuarded,
    CopyLineByLine,
    CopyLineByLineGuarded,
    ReadGreetingScoped,
    GreetingMissingScoped,
    CopyLineByLineScoped,
}

impl From<BinDemo> for Demo {
    fn from(d: BinDemo) -> Self {
        match d {
            BinDemo::ReadGreeting => Demo::ReadGreeting,
            BinDemo::GreetingMissing => Demo::GreetingMissing,
            BinDemo::GreetingMissingGuarded => Demo::GreetingMissingGuarded,
            BinDemo::CopyLineByLine => Demo::CopyLineByLine,
            BinDemo::CopyLineByLineGuarded => Demo::CopyLineByLineGuarded,
            BinDemo::ReadGreetingScoped => Demo::ReadGreetingScoped,
            BinDemo::GreetingMissingScoped => Demo::GreetingMissingScoped,
            BinDemo::CopyLineByLineScoped => Demo::CopyLineByLineScoped,
        }
    }
}

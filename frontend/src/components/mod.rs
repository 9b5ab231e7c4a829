pub mod addendums;


mod property_codec;
mod scenarios;

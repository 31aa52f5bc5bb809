mod decoder;
mod derive;

pub static RAW_INPUT_HELP: &str = "Dimensions of raw input pixels

Inputs without a .qoi extension are read as raw interleaved
8 bit pixels, row by row from the top left corner. Their width,
height and channel count have to be given since raw files
carry no header.";

pub static OUT_CHANNELS_HELP: &str = "Channels of decoded pixels

By default pixels are written with the channel count stored in
the image header. Setting 4 for an RGB image adds an opaque alpha
channel, setting 3 for an RGBA image drops alpha.";

pub static STRICT_HELP: &str = "Reject images with a bad colorspace byte or end marker

Without this such images are decoded with a warning.";

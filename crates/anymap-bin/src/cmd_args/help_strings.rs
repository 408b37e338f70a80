/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static KERNEL_HELP: &str = "Convolve the image with a custom square matrix

SIZE is the length of a side and must be odd, WEIGHTS are SIZE*SIZE 
comma separated numbers given row by row.

E.g --kernel 3 0,-1,0,-1,5,-1,0,-1,0 sharpens an image";

pub static LENIENT_HELP: &str = "Clamp samples above the max value instead of failing

By default a sample larger than the max value declared in the header 
makes decoding fail, with this set it's treated as the max value";

pub static AFTER_HELP: &str = "Filters run in the order equalize, stretch, blur, kernel 
regardless of the order they are given in.

A JSON summary of every image is written to standard output.";
